use super::*;

pub(crate) struct CommentEntry {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) children: Vec<usize>,
  pub(crate) depth: usize,
  pub(crate) expanded: bool,
  pub(crate) id: u64,
  pub(crate) parent: Option<usize>,
  pub(crate) timestamp: String,
  pub(crate) truncated: bool,
}

impl CommentEntry {
  pub(crate) fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  pub(crate) fn header(&self) -> String {
    let author = if self.author.trim().is_empty() {
      "Anonymous"
    } else {
      self.author.as_str()
    };

    let when = format_timestamp(&self.timestamp);

    if when.is_empty() {
      author.to_string()
    } else {
      format!("{author} • {when}")
    }
  }
}
