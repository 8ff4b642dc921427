use serde_json::Value;

/// Meeting metadata from the first extraction call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingInfo {
    pub meeting_title: Option<String>,
    pub meeting_date: Option<String>,
    pub attendees: Vec<String>,
    pub summary: Option<String>,
}

/// Parse the metadata response body.
///
/// Response-shape defects never fail the run: an unparseable body, missing
/// keys, or wrong-typed values all degrade to the field defaults.
pub fn parse_meeting_info(body: &str) -> MeetingInfo {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "metadata response is not JSON, using defaults");
            return MeetingInfo::default();
        }
    };

    MeetingInfo {
        meeting_title: string_key(&value, "meeting_title"),
        meeting_date: string_key(&value, "meeting_date"),
        attendees: string_list_key(&value, "attendees"),
        summary: string_key(&value, "summary"),
    }
}

/// Parse the item response body into untyped candidate objects.
///
/// A body without an `items` array yields zero candidates, not an error.
pub fn parse_item_candidates(body: &str) -> Vec<Value> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "items response is not JSON, extracting nothing");
            return Vec::new();
        }
    };

    match value.get("items").and_then(Value::as_array) {
        Some(items) => items.clone(),
        None => {
            tracing::warn!("items response has no \"items\" array");
            Vec::new()
        }
    }
}

fn string_key(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

fn string_list_key(value: &Value, key: &str) -> Vec<String> {
    match value.get(key).and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        None => Vec::new(),
    }
}
