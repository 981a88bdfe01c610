//! Core data models used throughout Campus Assist.
//!
//! [`Cell`] is the scalar stored in every table. [`Answer`] is what a lookup
//! (and therefore the router) produces for a single question; the formatter
//! renders it as text or as structured JSON.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single spreadsheet value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Integer view of the cell. Whole floats and numeric text count.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            Cell::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Text used when matching the cell against a lookup key. Whole floats
    /// drop their `.0` so a roll number column read as floats still matches.
    pub fn key_text(&self) -> String {
        match self {
            Cell::Float(v) => v.to_string(),
            other => other.to_string().trim().to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) if v.fract() == 0.0 && v.abs() < 1e16 => write!(f, "{:.1}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_none(),
            Cell::Int(i) => serializer.serialize_i64(*i),
            Cell::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            Cell::Float(_) => serializer.serialize_none(),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Ordered `(field, value)` pairs.
pub type Fields = Vec<(String, Cell)>;

/// A top-level entry of a nested record.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Value(Cell),
    Group(Fields),
}

/// Why a lookup or the router answered with a plain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// The key is not present in the table.
    NotFound,
    /// A required slot (semester, section, subject code) was not in the question.
    MissingSlot,
    /// A slot was present but outside the supported range.
    InvalidSlot,
    /// No keyword matched.
    UnrecognizedIntent,
}

/// The answer to one question.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// A record with only scalar fields.
    Flat(Fields),
    /// A record with at least one nested group.
    Nested(Vec<(String, Entry)>),
    /// A plain in-band message.
    Message { kind: MessageKind, text: String },
    /// Pre-rendered markup, passed through untouched.
    Markup(String),
}

impl Answer {
    pub fn not_found(text: impl Into<String>) -> Self {
        Answer::Message {
            kind: MessageKind::NotFound,
            text: text.into(),
        }
    }

    pub fn missing_slot(text: impl Into<String>) -> Self {
        Answer::Message {
            kind: MessageKind::MissingSlot,
            text: text.into(),
        }
    }

    pub fn invalid_slot(text: impl Into<String>) -> Self {
        Answer::Message {
            kind: MessageKind::InvalidSlot,
            text: text.into(),
        }
    }

    pub fn unrecognized(text: impl Into<String>) -> Self {
        Answer::Message {
            kind: MessageKind::UnrecognizedIntent,
            text: text.into(),
        }
    }

    /// Short label used in logs.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Answer::Flat(_) => "flat",
            Answer::Nested(_) => "nested",
            Answer::Message { kind, .. } => match kind {
                MessageKind::NotFound => "not_found",
                MessageKind::MissingSlot => "missing_slot",
                MessageKind::InvalidSlot => "invalid_slot",
                MessageKind::UnrecognizedIntent => "unrecognized",
            },
            Answer::Markup(_) => "markup",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Answer::Message {
                kind: MessageKind::NotFound,
                ..
            }
        )
    }

    /// Value of a top-level scalar field, if this is a record.
    pub fn field(&self, name: &str) -> Option<&Cell> {
        match self {
            Answer::Flat(fields) => fields.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            Answer::Nested(entries) => entries.iter().find_map(|(k, e)| match e {
                Entry::Value(v) if k == name => Some(v),
                _ => None,
            }),
            _ => None,
        }
    }

    /// Fields of a nested group, if this is a nested record containing it.
    pub fn group(&self, name: &str) -> Option<&Fields> {
        match self {
            Answer::Nested(entries) => entries.iter().find_map(|(k, e)| match e {
                Entry::Group(g) if k == name => Some(g),
                _ => None,
            }),
            _ => None,
        }
    }
}
