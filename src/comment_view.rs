use super::*;

pub(crate) struct CommentView {
  pub(crate) entries: Vec<CommentEntry>,
  pub(crate) hidden: usize,
  pub(crate) offset: usize,
  pub(crate) selected: Option<usize>,
}

impl CommentView {
  pub(crate) fn collapse_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.expanded && !entry.children.is_empty() {
        entry.expanded = false;
      } else if let Some(parent) = entry.parent {
        self.selected = Some(parent);
      }
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn ensure_selection_visible(&mut self) {
    let mut current = self.selected;

    while let Some(idx) = current {
      if self.is_visible(idx) {
        self.selected = Some(idx);
        return;
      }

      current = self.entries.get(idx).and_then(|entry| entry.parent);
    }

    self.selected = self.visible_indexes().first().copied();
  }

  pub(crate) fn expand_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.children.is_empty() {
        return;
      }

      if entry.expanded {
        if let Some(child) = entry.children.first().copied() {
          self.selected = Some(child);
        }
      } else {
        entry.expanded = true;
      }
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn is_visible(&self, idx: usize) -> bool {
    let mut current = Some(idx);

    while let Some(i) = current {
      let Some(parent) = self.entries.get(i).and_then(|entry| entry.parent)
      else {
        break;
      };

      if let Some(parent_entry) = self.entries.get(parent)
        && !parent_entry.expanded
      {
        return false;
      }

      current = Some(parent);
    }

    true
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let (visible, selected_pos) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let current = selected_pos.unwrap_or(0);
    let max_index = visible.len().saturating_sub(1);

    let target = if delta >= 0 {
      let step = usize::try_from(delta).unwrap_or(usize::MAX);
      current.saturating_add(step).min(max_index)
    } else {
      let step = delta
        .checked_abs()
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(usize::MAX);

      current.saturating_sub(step)
    };

    self.selected = Some(visible[target]);
  }

  pub(crate) fn new(tree: CommentTree) -> Self {
    let mut entries = Vec::new();

    for root in tree.roots {
      Self::push_node(&mut entries, root, None, 0);
    }

    let selected = if entries.is_empty() { None } else { Some(0) };

    Self {
      entries,
      hidden: tree.hidden,
      offset: 0,
      selected,
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.move_by(isize::try_from(step).unwrap_or(isize::MAX));
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.move_by(-isize::try_from(step).unwrap_or(isize::MAX));
  }

  fn push_node(
    entries: &mut Vec<CommentEntry>,
    node: CommentNode,
    parent: Option<usize>,
    depth: usize,
  ) -> usize {
    let CommentNode {
      body,
      children,
      id,
      name,
      timestamp,
      truncated,
    } = node;

    let idx = entries.len();

    entries.push(CommentEntry {
      author: name,
      body,
      children: Vec::new(),
      depth,
      expanded: true,
      id,
      parent,
      timestamp,
      truncated,
    });

    let mut child_indices = Vec::new();

    for child in children {
      child_indices.push(Self::push_node(
        entries,
        child,
        Some(idx),
        depth.saturating_add(1),
      ));
    }

    if let Some(entry) = entries.get_mut(idx) {
      entry.children = child_indices;
    }

    idx
  }

  pub(crate) fn select_index_at(&mut self, pos: usize) {
    let (visible, _) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let index = pos.min(visible.len().saturating_sub(1));

    self.selected = Some(visible[index]);
  }

  pub(crate) fn select_next(&mut self) {
    self.move_by(1);
  }

  pub(crate) fn select_previous(&mut self) {
    self.move_by(-1);
  }

  pub(crate) fn selected_entry(&self) -> Option<&CommentEntry> {
    self.selected.and_then(|idx| self.entries.get(idx))
  }

  pub(crate) fn toggle_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.children.is_empty() {
        return;
      }

      entry.expanded = !entry.expanded;
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn visible_indexes(&self) -> Vec<usize> {
    (0..self.entries.len())
      .filter(|&idx| self.is_visible(idx))
      .collect()
  }

  pub(crate) fn visible_with_selection(&self) -> (Vec<usize>, Option<usize>) {
    let visible = self.visible_indexes();

    let selected_pos = self
      .selected
      .and_then(|selected| visible.iter().position(|&idx| idx == selected));

    (visible, selected_pos)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(id: u64, parent_id: u64) -> CommentRecord {
    CommentRecord {
      comment: format!("comment {id}"),
      id,
      name: format!("user{id}"),
      parent_id,
      timestamp: String::new(),
    }
  }

  fn make_view(records: &[CommentRecord]) -> CommentView {
    CommentView::new(CommentTree::build(records, 20))
  }

  #[test]
  fn new_flattens_depth_first_with_depths() {
    let view =
      make_view(&[record(1, 0), record(2, 1), record(3, 2), record(4, 0)]);

    let ids: Vec<u64> = view.entries.iter().map(|entry| entry.id).collect();

    let depths: Vec<usize> =
      view.entries.iter().map(|entry| entry.depth).collect();

    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(depths, vec![0, 1, 2, 0]);
    assert_eq!(view.selected, Some(0));
  }

  #[test]
  fn new_carries_hidden_record_count() {
    let view = make_view(&[record(1, 0), record(5, 99)]);

    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.hidden, 1);
  }

  #[test]
  fn empty_view_has_no_selection() {
    let view = make_view(&[]);

    assert!(view.entries.is_empty());
    assert_eq!(view.selected, None);
    assert!(view.selected_entry().is_none());
  }

  #[test]
  fn toggle_selected_collapses_and_expands() {
    let mut view = make_view(&[record(1, 0), record(2, 1)]);

    assert!(view.entries[0].expanded);

    view.toggle_selected();
    assert!(!view.entries[0].expanded);

    view.toggle_selected();
    assert!(view.entries[0].expanded);
  }

  #[test]
  fn collapse_selected_moves_to_parent_when_child_selected() {
    let mut view = make_view(&[record(1, 0), record(2, 1)]);

    view.select_index_at(1);
    assert_eq!(view.selected, Some(1));

    view.collapse_selected();
    assert_eq!(view.selected, Some(0));
  }

  #[test]
  fn expand_selected_moves_into_first_child() {
    let mut view = make_view(&[record(1, 0), record(2, 1)]);

    view.expand_selected();
    assert_eq!(view.selected, Some(1));
  }

  #[test]
  fn visible_indexes_respect_collapsed_ancestors() {
    let mut view = make_view(&[record(1, 0), record(2, 1), record(3, 2)]);

    assert_eq!(view.visible_indexes(), vec![0, 1, 2]);

    view.entries[0].expanded = false;
    assert_eq!(view.visible_indexes(), vec![0]);
  }

  #[test]
  fn ensure_selection_visible_promotes_hidden_selection() {
    let mut view = make_view(&[record(1, 0), record(2, 1)]);

    view.select_index_at(1);
    view.entries[0].expanded = false;
    view.ensure_selection_visible();

    assert_eq!(view.selected, Some(0));
  }

  #[test]
  fn select_next_skips_collapsed_subtrees() {
    let mut view = make_view(&[record(1, 0), record(2, 1), record(3, 0)]);

    view.entries[0].expanded = false;

    view.select_next();
    assert_eq!(view.selected, Some(2));
  }
}
