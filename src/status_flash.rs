use super::*;

#[derive(Clone)]
pub(crate) struct StatusFlash {
  expires_at: Instant,
  original: String,
  shown: String,
}

impl StatusFlash {
  pub(crate) const DURATION: Duration = Duration::from_secs(4);

  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(shown: String, original: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::DURATION,
      original,
      shown,
    }
  }

  pub(crate) fn original(&self) -> &str {
    &self.original
  }

  pub(crate) fn shown(&self) -> &str {
    &self.shown
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_flash_is_not_yet_expired() {
    let flash = StatusFlash::new("saved".to_string(), "ready".to_string());

    assert!(!flash.is_expired());
    assert_eq!(flash.shown(), "saved");
    assert_eq!(flash.original(), "ready");
  }
}
