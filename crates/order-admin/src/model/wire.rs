//! Lenient field decoders for documents written by loosely-typed clients.

use crate::model::LineItem;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` or a missing value becomes an empty string.
pub(crate) fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a string or a number (phone numbers and totals are stored both ways).
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    })
}

/// Dangling references dereference to `null`; they become items with no fields.
pub(crate) fn line_items<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<LineItem>>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
