use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) api_url: String,
  pub(crate) max_comments: usize,
  pub(crate) metric: String,
}

impl Config {
  pub(crate) const DEFAULT_API_URL: &'static str = "http://localhost:8080";
  pub(crate) const DEFAULT_MAX_COMMENTS: usize = 20;
  pub(crate) const DEFAULT_METRIC: &'static str = "time";

  pub(crate) fn from_env() -> Result<Self> {
    let api_url = env::var("GUESTBOOK_API_URL")
      .map(|url| url.trim_end_matches('/').to_string())
      .unwrap_or_else(|_| Self::DEFAULT_API_URL.to_string());

    let max_comments = match env::var("GUESTBOOK_MAX_COMMENTS") {
      Ok(raw) => raw
        .parse::<usize>()
        .with_context(|| format!("invalid GUESTBOOK_MAX_COMMENTS: {raw}"))?,
      Err(_) => Self::DEFAULT_MAX_COMMENTS,
    };

    let metric = env::var("GUESTBOOK_METRIC")
      .unwrap_or_else(|_| Self::DEFAULT_METRIC.to_string());

    Ok(Self {
      api_url,
      max_comments,
      metric,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_env_reads_overrides_and_falls_back_to_defaults() {
    // SAFETY: test runs single-threaded over these variables.
    unsafe {
      env::remove_var("GUESTBOOK_API_URL");
      env::remove_var("GUESTBOOK_MAX_COMMENTS");
      env::remove_var("GUESTBOOK_METRIC");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_url, Config::DEFAULT_API_URL);
    assert_eq!(config.max_comments, Config::DEFAULT_MAX_COMMENTS);
    assert_eq!(config.metric, Config::DEFAULT_METRIC);

    // SAFETY: test runs single-threaded over these variables.
    unsafe {
      env::set_var("GUESTBOOK_API_URL", "https://example.com/api/");
      env::set_var("GUESTBOOK_MAX_COMMENTS", "5");
      env::set_var("GUESTBOOK_METRIC", "length");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_url, "https://example.com/api");
    assert_eq!(config.max_comments, 5);
    assert_eq!(config.metric, "length");

    // SAFETY: test runs single-threaded over these variables.
    unsafe {
      env::set_var("GUESTBOOK_MAX_COMMENTS", "many");
    }

    assert!(Config::from_env().is_err());

    // SAFETY: test runs single-threaded over these variables.
    unsafe {
      env::remove_var("GUESTBOOK_API_URL");
      env::remove_var("GUESTBOOK_MAX_COMMENTS");
      env::remove_var("GUESTBOOK_METRIC");
    }
  }
}
