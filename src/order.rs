#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
  Ascending,
  Descending,
}

impl Order {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::Ascending => "asc",
      Self::Descending => "desc",
    }
  }

  pub(crate) fn toggled(self) -> Self {
    match self {
      Self::Ascending => Self::Descending,
      Self::Descending => Self::Ascending,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toggled_flips_between_directions() {
    assert_eq!(Order::Ascending.toggled(), Order::Descending);
    assert_eq!(Order::Descending.toggled(), Order::Ascending);
  }

  #[test]
  fn as_str_matches_query_parameter_values() {
    assert_eq!(Order::Ascending.as_str(), "asc");
    assert_eq!(Order::Descending.as_str(), "desc");
  }
}
