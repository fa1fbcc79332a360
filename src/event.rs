use super::*;

pub(crate) enum Event {
  Chart {
    request_id: u64,
    result: Result<(BTreeMap<String, DayCounts>, Vec<u64>), ApiError>,
  },
  Comments {
    request_id: u64,
    result: Result<Vec<CommentRecord>, ApiError>,
  },
  WriteFailed {
    error: ApiError,
    request_id: u64,
  },
}
