use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FeedQuery {
  pub(crate) max_comments: usize,
  pub(crate) metric: String,
  pub(crate) order: Order,
}
