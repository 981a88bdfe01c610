//! Response formatting.
//!
//! The transport layer puts the result of [`render`] under a single
//! `"response"` key. In [`OutputMode::FormattedText`] every answer becomes
//! one string; in [`OutputMode::RawStructured`] records are sent as ordered
//! JSON objects instead.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::{Answer, Entry, Fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    FormattedText,
    RawStructured,
}

/// Render an answer as human-readable text.
///
/// - flat record: one `key: value` line per field
/// - nested record: scalars as `key: value`, each group as a `key:` header
///   preceded by a blank line and followed by `  subkey: value` lines
/// - message and markup: unchanged
pub fn format_text(answer: &Answer) -> String {
    match answer {
        Answer::Flat(fields) => fields
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n"),
        Answer::Nested(entries) => {
            let mut out = String::new();
            for (key, entry) in entries {
                match entry {
                    Entry::Value(v) => out.push_str(&format!("{}: {}\n", key, v)),
                    Entry::Group(group) => {
                        out.push_str(&format!("\n{}:\n", key));
                        for (sub_key, sub_val) in group {
                            out.push_str(&format!("  {}: {}\n", sub_key, sub_val));
                        }
                    }
                }
            }
            out.trim().to_string()
        }
        Answer::Message { text, .. } => text.clone(),
        Answer::Markup(html) => html.clone(),
    }
}

fn fields_to_json(fields: &Fields) -> Value {
    let mut map = Map::new();
    for (k, v) in fields {
        map.insert(k.clone(), serde_json::to_value(v).unwrap_or(Value::Null));
    }
    Value::Object(map)
}

/// Structured form of an answer. Messages keep the `{"response": ...}` shape.
pub fn to_json(answer: &Answer) -> Value {
    match answer {
        Answer::Flat(fields) => fields_to_json(fields),
        Answer::Nested(entries) => {
            let mut map = Map::new();
            for (key, entry) in entries {
                let value = match entry {
                    Entry::Value(v) => serde_json::to_value(v).unwrap_or(Value::Null),
                    Entry::Group(group) => fields_to_json(group),
                };
                map.insert(key.clone(), value);
            }
            Value::Object(map)
        }
        Answer::Message { text, .. } => {
            let mut map = Map::new();
            map.insert("response".to_string(), Value::String(text.clone()));
            Value::Object(map)
        }
        Answer::Markup(html) => Value::String(html.clone()),
    }
}

/// The payload for the `"response"` field under `mode`.
pub fn render(answer: &Answer, mode: OutputMode) -> Value {
    match mode {
        OutputMode::FormattedText => Value::String(format_text(answer)),
        OutputMode::RawStructured => to_json(answer),
    }
}
