use super::*;

pub(crate) struct CommentTree {
  pub(crate) hidden: usize,
  pub(crate) roots: Vec<CommentNode>,
}

impl CommentTree {
  fn attach(
    id: u64,
    by_id: &HashMap<u64, &CommentRecord>,
    children_of: &HashMap<u64, Vec<u64>>,
    visited: &mut HashSet<u64>,
  ) -> CommentNode {
    visited.insert(id);

    let record = by_id[&id];

    let mut node = CommentNode {
      body: record.comment.clone(),
      children: Vec::new(),
      id,
      name: record.name.clone(),
      timestamp: record.timestamp.clone(),
      truncated: false,
    };

    for child in children_of.get(&id).into_iter().flatten() {
      if visited.contains(child) {
        // Malformed input (cycles, duplicate parent links) stops descent
        // here instead of recursing forever.
        node.truncated = true;
        continue;
      }

      node
        .children
        .push(Self::attach(*child, by_id, children_of, visited));
    }

    node
  }

  pub(crate) fn build(records: &[CommentRecord], max_roots: usize) -> Self {
    let mut by_id = HashMap::new();
    let mut children_of: HashMap<u64, Vec<u64>> = HashMap::new();
    let mut root_ids = Vec::new();

    for record in records {
      // Duplicate ids overwrite earlier content.
      by_id.insert(record.id, record);

      if record.is_root() {
        root_ids.push(record.id);
      } else {
        children_of
          .entry(record.parent_id)
          .or_default()
          .push(record.id);
      }
    }

    let mut visited = HashSet::new();
    let mut roots = Vec::new();

    for id in root_ids {
      if roots.len() == max_roots {
        break;
      }

      if visited.contains(&id) {
        continue;
      }

      roots.push(Self::attach(id, &by_id, &children_of, &mut visited));
    }

    Self {
      hidden: by_id.len().saturating_sub(visited.len()),
      roots,
    }
  }

  pub(crate) fn reachable(&self) -> usize {
    fn count(node: &CommentNode) -> usize {
      1 + node.children.iter().map(count).sum::<usize>()
    }

    self.roots.iter().map(count).sum()
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
      timestamp: "1590000000000".to_string(),
    }
  }

  #[test]
  fn build_nests_children_under_parents() {
    let records = vec![record(1, 0), record(2, 1), record(3, 0)];

    let tree = CommentTree::build(&records, 10);

    assert_eq!(tree.roots.len(), 2);
    assert_eq!(tree.roots[0].id, 1);
    assert_eq!(tree.roots[0].children.len(), 1);
    assert_eq!(tree.roots[0].children[0].id, 2);
    assert_eq!(tree.roots[1].id, 3);
    assert_eq!(tree.reachable(), 3);
    assert_eq!(tree.hidden, 0);
  }

  #[test]
  fn children_keep_input_order() {
    let records = vec![record(1, 0), record(3, 1), record(2, 1)];

    let tree = CommentTree::build(&records, 10);

    let child_ids: Vec<u64> =
      tree.roots[0].children.iter().map(|node| node.id).collect();

    assert_eq!(child_ids, vec![3, 2]);
  }

  #[test]
  fn root_cap_limits_roots_but_not_descendants() {
    let records = vec![record(1, 0), record(2, 1), record(3, 0)];

    let tree = CommentTree::build(&records, 1);

    assert_eq!(tree.roots.len(), 1);
    assert_eq!(tree.roots[0].id, 1);
    assert_eq!(tree.roots[0].children[0].id, 2);
    assert_eq!(tree.reachable(), 2);
    assert_eq!(tree.hidden, 1);
  }

  #[test]
  fn orphans_are_never_rendered() {
    let records = vec![record(1, 0), record(5, 99)];

    let tree = CommentTree::build(&records, 10);

    assert_eq!(tree.roots.len(), 1);
    assert!(tree.roots[0].children.is_empty());
    assert_eq!(tree.reachable(), 1);
    assert_eq!(tree.hidden, 1);
  }

  #[test]
  fn two_node_cycle_terminates_with_nothing_rendered() {
    let records = vec![record(1, 2), record(2, 1)];

    let tree = CommentTree::build(&records, 10);

    assert!(tree.roots.is_empty());
    assert_eq!(tree.reachable(), 0);
    assert_eq!(tree.hidden, 2);
  }

  #[test]
  fn duplicate_ids_keep_the_last_record_content() {
    let mut second = record(1, 0);
    second.comment = "rewritten".to_string();

    let records = vec![record(1, 0), second];

    let tree = CommentTree::build(&records, 10);

    assert_eq!(tree.roots.len(), 1);
    assert_eq!(tree.roots[0].body, "rewritten");
    assert_eq!(tree.reachable(), 1);
  }

  #[test]
  fn repeated_child_links_attach_once_and_mark_truncation() {
    let records = vec![record(1, 0), record(3, 0), record(2, 1), record(2, 3)];

    let tree = CommentTree::build(&records, 10);

    assert_eq!(tree.roots[0].children.len(), 1);
    assert_eq!(tree.roots[0].children[0].id, 2);
    assert!(tree.roots[1].children.is_empty());
    assert!(tree.roots[1].truncated);
    assert_eq!(tree.reachable(), 3);
  }

  #[test]
  fn cycle_reachable_through_duplicates_is_truncated() {
    let records =
      vec![record(1, 0), record(2, 1), record(3, 2), record(2, 3)];

    let tree = CommentTree::build(&records, 10);

    let child = &tree.roots[0].children[0];

    assert_eq!(child.id, 2);
    assert_eq!(child.children[0].id, 3);
    assert!(child.children[0].truncated);
    assert_eq!(tree.reachable(), 3);
  }

  #[test]
  fn deep_chain_is_fully_reachable() {
    let records: Vec<CommentRecord> =
      (1..=40).map(|id| record(id, id - 1)).collect();

    let tree = CommentTree::build(&records, 10);

    assert_eq!(tree.roots.len(), 1);
    assert_eq!(tree.reachable(), 40);
    assert_eq!(tree.hidden, 0);
  }
}
