use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  http: reqwest::Client,
}

impl Client {
  pub(crate) async fn delete_all(&self) -> Result<(), ApiError> {
    self.post_empty("/delete-data").await
  }

  pub(crate) fn feed_url(&self, query: &FeedQuery) -> String {
    format!(
      "{}/data?maxcomments={}&metric={}&order={}",
      self.base_url,
      query.max_comments,
      query.metric,
      query.order.as_str()
    )
  }

  pub(crate) async fn fetch_chart(
    &self,
  ) -> Result<BTreeMap<String, DayCounts>, ApiError> {
    self
      .get_json(format!("{}/numcomment-chart", self.base_url))
      .await
  }

  pub(crate) async fn fetch_comments(
    &self,
    query: &FeedQuery,
  ) -> Result<Vec<CommentRecord>, ApiError> {
    self.get_json(self.feed_url(query)).await
  }

  pub(crate) async fn fetch_reply_sizes(&self) -> Result<Vec<u64>, ApiError> {
    self
      .get_json(format!("{}/replytree-chart", self.base_url))
      .await
  }

  async fn get_json<T: serde::de::DeserializeOwned>(
    &self,
    url: String,
  ) -> Result<T, ApiError> {
    let response = self
      .http
      .get(url)
      .send()
      .await
      .map_err(ApiError::from_transport)?;

    let status = response.status();

    if !status.is_success() {
      return Err(ApiError::Server { status });
    }

    response.json().await.map_err(ApiError::from_transport)
  }

  pub(crate) fn new(base_url: String) -> Self {
    Self {
      base_url,
      http: reqwest::Client::new(),
    }
  }

  pub(crate) async fn post_comment(
    &self,
    name: &str,
    body: &str,
  ) -> Result<(), ApiError> {
    let name = if name.trim().is_empty() {
      "Anonymous"
    } else {
      name
    };

    self
      .post_json(
        "/data",
        &serde_json::json!({
          "comment": body,
          "name": name,
          "timestamp": unix_millis(),
        }),
      )
      .await
  }

  async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
    let response = self
      .http
      .post(format!("{}{path}", self.base_url))
      .send()
      .await
      .map_err(ApiError::from_transport)?;

    let status = response.status();

    if status.is_success() {
      Ok(())
    } else {
      Err(ApiError::Server { status })
    }
  }

  async fn post_json(
    &self,
    path: &str,
    payload: &Value,
  ) -> Result<(), ApiError> {
    let response = self
      .http
      .post(format!("{}{path}", self.base_url))
      .json(payload)
      .send()
      .await
      .map_err(ApiError::from_transport)?;

    let status = response.status();

    if status.is_success() {
      Ok(())
    } else {
      Err(ApiError::Server { status })
    }
  }

  pub(crate) async fn post_reply(
    &self,
    parent_id: u64,
    body: &str,
  ) -> Result<(), ApiError> {
    self
      .post_json(
        "/reply",
        &serde_json::json!({
          "comment": body,
          "parentid": parent_id,
          "timestamp": unix_millis(),
        }),
      )
      .await
  }
}
