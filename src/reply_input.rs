use super::*;

pub(crate) struct ReplyInput {
  pub(crate) buffer: String,
  pub(crate) message_backup: String,
  pub(crate) parent_id: u64,
}

impl ReplyInput {
  pub(crate) fn new(parent_id: u64, message_backup: String) -> Self {
    Self {
      buffer: String::new(),
      message_backup,
      parent_id,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Reply to #{}: {}", self.parent_id, self.buffer)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prompt_names_the_parent_comment() {
    let mut input = ReplyInput::new(7, String::new());

    input.buffer.push_str("agreed");

    assert_eq!(input.prompt(), "Reply to #7: agreed");
  }
}
