use super::*;

pub(crate) fn deserialize_timestamp<'de, D>(
  deserializer: D,
) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;

  match value {
    Value::Null => Ok(String::new()),
    Value::Number(n) => Ok(n.to_string()),
    Value::String(s) => Ok(s),
    Value::Bool(b) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Value::Array(_) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Value::Object(_) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

pub(crate) fn format_timestamp(raw: &str) -> String {
  if raw.is_empty() {
    return String::new();
  }

  let Ok(millis) = raw.parse::<i64>() else {
    return raw.to_string();
  };

  match Timestamp::from_millisecond(millis) {
    Ok(timestamp) => timestamp.strftime("%Y-%m-%d %H:%M").to_string(),
    Err(_) => raw.to_string(),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let kept: String = text.chars().take(max_chars).collect();

  format!("{}...", kept.trim_end())
}

pub(crate) fn unix_millis() -> u64 {
  SystemTime::now()
    .duration_since(SystemTime::UNIX_EPOCH)
    .map_or(0, |elapsed| {
      u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    })
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(std::mem::take(&mut current));
      current.push_str(word);
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Deserialize, PartialEq)]
  struct TimestampWrapper {
    #[serde(deserialize_with = "deserialize_timestamp")]
    value: String,
  }

  fn parse_value(input: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str::<TimestampWrapper>(input)
      .map(|wrapper| wrapper.value)
  }

  #[test]
  fn deserialize_timestamp_accepts_numbers_strings_and_null() {
    assert_eq!(
      parse_value(r#"{"value": 1577836800000}"#).unwrap(),
      "1577836800000"
    );

    assert_eq!(
      parse_value(r#"{"value": "yesterday"}"#).unwrap(),
      "yesterday"
    );

    assert_eq!(parse_value(r#"{"value": null}"#).unwrap(), "");

    assert!(
      parse_value(r#"{"value": true}"#).is_err(),
      "bools should fail deserialization"
    );
  }

  #[test]
  fn format_timestamp_renders_epoch_milliseconds_as_utc() {
    assert_eq!(format_timestamp("1577836800000"), "2020-01-01 00:00");
  }

  #[test]
  fn format_timestamp_passes_non_numeric_values_through() {
    assert_eq!(format_timestamp("just now"), "just now");
    assert_eq!(format_timestamp(""), "");
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_keeps_whitespace_only_input() {
    assert_eq!(wrap_text("   ", 5), vec!["   ".to_string()]);
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }

  #[test]
  fn wrap_text_does_not_wrap_when_within_width() {
    assert_eq!(wrap_text("short text", 20), vec!["short text".to_string()]);
  }
}
