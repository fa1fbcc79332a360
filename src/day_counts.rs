use super::*;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct DayCounts {
  pub(crate) replies: u64,
  #[serde(rename = "rootComments")]
  pub(crate) root_comments: u64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_server_field_names() {
    let counts = serde_json::from_str::<DayCounts>(
      r#"{"rootComments":3,"replies":5}"#,
    )
    .unwrap();

    assert_eq!(
      counts,
      DayCounts {
        replies: 5,
        root_comments: 3
      }
    );
  }
}
