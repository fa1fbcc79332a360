use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ComposeField {
  Body,
  Name,
}

pub(crate) struct ComposeInput {
  pub(crate) body: String,
  pub(crate) field: ComposeField,
  pub(crate) message_backup: String,
  pub(crate) name: String,
}

impl ComposeInput {
  pub(crate) fn active_buffer_mut(&mut self) -> &mut String {
    match self.field {
      ComposeField::Body => &mut self.body,
      ComposeField::Name => &mut self.name,
    }
  }

  pub(crate) fn new(message_backup: String) -> Self {
    Self {
      body: String::new(),
      field: ComposeField::Name,
      message_backup,
      name: String::new(),
    }
  }

  pub(crate) fn prompt(&self) -> String {
    match self.field {
      ComposeField::Body => format!("Comment: {}", self.body),
      ComposeField::Name => format!("Name: {}", self.name),
    }
  }

  pub(crate) fn switch_field(&mut self) {
    self.field = match self.field {
      ComposeField::Body => ComposeField::Name,
      ComposeField::Name => ComposeField::Body,
    };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn switch_field_moves_between_name_and_body() {
    let mut input = ComposeInput::new(String::new());

    input.active_buffer_mut().push_str("ada");
    assert_eq!(input.prompt(), "Name: ada");

    input.switch_field();
    input.active_buffer_mut().push_str("hello");
    assert_eq!(input.prompt(), "Comment: hello");

    input.switch_field();
    assert_eq!(input.prompt(), "Name: ada");
  }
}
