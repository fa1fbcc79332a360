use super::*;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
  #[error("response body could not be decoded: {0}")]
  Decode(#[source] reqwest::Error),
  #[error("network error: {0}")]
  Network(#[source] reqwest::Error),
  #[error("server returned {status}")]
  Server { status: StatusCode },
}

impl ApiError {
  pub(crate) fn from_transport(error: reqwest::Error) -> Self {
    if error.is_decode() {
      Self::Decode(error)
    } else {
      Self::Network(error)
    }
  }
}
