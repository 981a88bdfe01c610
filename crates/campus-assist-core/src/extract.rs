//! Slot extractors.
//!
//! Each extractor takes the lower-cased question and returns an optional
//! value. `None` means "not mentioned", never an error.
//!
//! | Slot | Pattern |
//! |------|---------|
//! | roll number | first `\b\d{12}\b` |
//! | semester | `semester\s*(\d+)`, case-insensitive |
//! | section | `a section` / `section a` → A, then `b section` / `section b` → B |
//! | subject code | first `[A-Z]{3,}\d{3,}` in the upper-cased question |

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static RRN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{12}\b").expect("roll number regex is valid"));
static SEMESTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)semester\s*(\d+)").expect("semester regex is valid"));
static SUBJECT_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{3,}\d{3,}").expect("subject code regex is valid"));

/// Timetable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    A,
    B,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::A => f.write_str("A"),
            Section::B => f.write_str("B"),
        }
    }
}

/// The 12-digit roll number, kept as text.
pub fn extract_rrn(question: &str) -> Option<String> {
    RRN_RE.find(question).map(|m| m.as_str().to_string())
}

pub fn extract_semester(question: &str) -> Option<u64> {
    SEMESTER_RE
        .captures(question)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Section A is checked first, so a question naming both resolves to A.
pub fn extract_section(question: &str) -> Option<Section> {
    if question.contains("a section") || question.contains("section a") {
        Some(Section::A)
    } else if question.contains("b section") || question.contains("section b") {
        Some(Section::B)
    } else {
        None
    }
}

pub fn extract_subject_code(question: &str) -> Option<String> {
    let upper = question.to_uppercase();
    SUBJECT_CODE_RE
        .find(&upper)
        .map(|m| m.as_str().to_string())
}

/// Every slot found in one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    pub rrn: Option<String>,
    pub semester: Option<u64>,
    pub section: Option<Section>,
    pub subject_code: Option<String>,
}

impl Slots {
    /// Run all extractors. The subject code slot is only filled when enabled.
    pub fn extract(question: &str, subject_code_slot: bool) -> Self {
        Self {
            rrn: extract_rrn(question),
            semester: extract_semester(question),
            section: extract_section(question),
            subject_code: if subject_code_slot {
                extract_subject_code(question)
            } else {
                None
            },
        }
    }
}
