use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  DeleteAll {
    query: FeedQuery,
    request_id: u64,
  },
  FetchChart {
    request_id: u64,
  },
  FetchComments {
    query: FeedQuery,
    request_id: u64,
  },
  SubmitComment {
    body: String,
    name: String,
    query: FeedQuery,
    request_id: u64,
  },
  SubmitReply {
    body: String,
    parent_id: u64,
    query: FeedQuery,
    request_id: u64,
  },
}
