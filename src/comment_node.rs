#[derive(Clone, Debug)]
pub(crate) struct CommentNode {
  pub(crate) body: String,
  pub(crate) children: Vec<CommentNode>,
  pub(crate) id: u64,
  pub(crate) name: String,
  pub(crate) timestamp: String,
  pub(crate) truncated: bool,
}
