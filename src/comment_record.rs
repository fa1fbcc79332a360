use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CommentRecord {
  pub(crate) comment: String,
  pub(crate) id: u64,
  pub(crate) name: String,
  #[serde(rename = "parentId")]
  pub(crate) parent_id: u64,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub(crate) timestamp: String,
}

impl CommentRecord {
  pub(crate) const ROOT_PARENT_ID: u64 = 0;

  pub(crate) fn is_root(&self) -> bool {
    self.parent_id == Self::ROOT_PARENT_ID
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_epoch_millisecond_timestamps() {
    let record = serde_json::from_str::<CommentRecord>(
      r#"{"id":1,"parentId":0,"name":"ada","timestamp":1577836800000,"comment":"hello"}"#,
    )
    .unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.parent_id, 0);
    assert_eq!(record.timestamp, "1577836800000");
    assert!(record.is_root());
  }

  #[test]
  fn deserializes_string_timestamps() {
    let record = serde_json::from_str::<CommentRecord>(
      r#"{"id":2,"parentId":1,"name":"lin","timestamp":"2020-01-01T00:00:00Z","comment":"hi"}"#,
    )
    .unwrap();

    assert_eq!(record.timestamp, "2020-01-01T00:00:00Z");
    assert!(!record.is_root());
  }
}
