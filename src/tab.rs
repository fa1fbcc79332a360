#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
  Chart,
  Comments,
  Gallery,
}

impl Tab {
  pub(crate) fn all() -> &'static [Self] {
    &[Self::Comments, Self::Chart, Self::Gallery]
  }

  pub(crate) fn index(self) -> usize {
    Self::all()
      .iter()
      .position(|&tab| tab == self)
      .unwrap_or(0)
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Chart => "chart",
      Self::Comments => "comments",
      Self::Gallery => "gallery",
    }
  }

  pub(crate) fn next(self) -> Self {
    match self {
      Self::Chart => Self::Gallery,
      Self::Comments => Self::Chart,
      Self::Gallery => Self::Comments,
    }
  }

  pub(crate) fn previous(self) -> Self {
    match self {
      Self::Chart => Self::Comments,
      Self::Comments => Self::Gallery,
      Self::Gallery => Self::Chart,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn next_and_previous_cycle_through_every_tab() {
    let mut tab = Tab::Comments;

    tab = tab.next();
    assert_eq!(tab, Tab::Chart);

    tab = tab.next();
    assert_eq!(tab, Tab::Gallery);

    tab = tab.next();
    assert_eq!(tab, Tab::Comments);

    assert_eq!(tab.previous(), Tab::Gallery);
    assert_eq!(Tab::Comments.index(), 0);
    assert_eq!(Tab::Gallery.index(), 2);
  }
}
