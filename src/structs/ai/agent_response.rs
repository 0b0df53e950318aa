use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Wire shape of the model's reply. Every field is optional and a field of
// the wrong JSON type reads as absent. Keys are lowercased before
// deserialization, hence the lowercase renames.

#[derive(Debug, Default, Deserialize)]
pub struct AgentResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_objects")]
    pub issues: Option<Vec<IssueDto>>,
    #[serde(default, rename = "suggestedyaml", deserialize_with = "lenient")]
    pub suggested_yaml: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub metadata: Option<MetadataDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IssueDto {
    #[serde(default, deserialize_with = "lenient")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub suggestion: Option<String>,
    #[serde(default, rename = "linereference", deserialize_with = "lenient")]
    pub line_reference: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetadataDto {
    #[serde(default, rename = "jobcount", deserialize_with = "lenient")]
    pub job_count: Option<i64>,
    #[serde(default, rename = "stepcount", deserialize_with = "lenient")]
    pub step_count: Option<i64>,
    #[serde(default, rename = "hastests", deserialize_with = "lenient")]
    pub has_tests: Option<bool>,
    #[serde(default, rename = "hascaching", deserialize_with = "lenient")]
    pub has_caching: Option<bool>,
    #[serde(default, rename = "hassecurityscanning", deserialize_with = "lenient")]
    pub has_security_scanning: Option<bool>,
    #[serde(default, rename = "hasartifactpublishing", deserialize_with = "lenient")]
    pub has_artifact_publishing: Option<bool>,
    #[serde(default, rename = "detectedtools", deserialize_with = "lenient_vec")]
    pub detected_tools: Option<Vec<String>>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Keeps the elements that deserialize and drops the rest.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect(),
        )),
        _ => Ok(None),
    }
}

/// Like `lenient`, but only a JSON object counts. Serde would otherwise
/// accept an array positionally for a struct.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

fn lenient_objects<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Lowercases object keys at every depth so field names match regardless of case.
pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter().map(|(k, v)| (k.to_lowercase(), lowercase_keys(v))).collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
