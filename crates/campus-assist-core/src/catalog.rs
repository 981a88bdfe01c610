//! The read-only table set every lookup runs against.
//!
//! A [`Catalog`] is assembled once at startup (see the root crate's loader)
//! and shared behind an `Arc` for the life of the process. Nothing in it is
//! ever mutated, so concurrent requests need no locking.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::extract::Section;
use crate::table::{ColumnNaming, Table};

/// Where semester results live.
#[derive(Debug, Clone)]
pub enum Results {
    /// One table per semester, keyed by semester number.
    Wide(BTreeMap<u64, Table>),
    /// A single table with a `SEMESTER` column.
    Long(Table),
}

/// Static colours for timetable rendering.
#[derive(Debug, Clone)]
pub struct TimetableStyle {
    pub subject_colors: HashMap<String, String>,
    pub venue_codes: HashSet<String>,
}

pub const DEFAULT_COLOR: &str = "#ffffff";

impl TimetableStyle {
    pub fn color_for(&self, subject: &str) -> &str {
        self.subject_colors
            .get(subject)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }

    pub fn is_venue(&self, part: &str) -> bool {
        self.venue_codes.contains(part)
    }
}

impl Default for TimetableStyle {
    fn default() -> Self {
        let subject_colors = [
            ("CSD3251", "#f0e68c"),
            ("CSDX631", "#add8e6"),
            ("SSDX11", "#98fb98"),
            ("SSDX12", "#98fb98"),
            ("SSDX13", "#98fb98"),
            ("SSDX14", "#98fb98"),
            ("CSDX626", "#87ceeb"),
            ("CSDX627", "#87ceeb"),
            ("CSD631", "#afeeee"),
            ("CSD3252", "#dda0dd"),
            ("OPEN ELECTIVE", "#f5deb3"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let venue_codes = ["LS002", "LS003", "LS004", "ES303"]
            .into_iter()
            .map(String::from)
            .collect();
        Self {
            subject_colors,
            venue_codes,
        }
    }
}

/// Every table the chatbot answers from.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub naming: ColumnNaming,
    pub students: Table,
    pub parents: Table,
    pub attendance: Table,
    pub results: Results,
    pub syllabus: Table,
    pub timetables: BTreeMap<Section, Table>,
    pub cgpa: Table,
    pub style: TimetableStyle,
}

impl Catalog {
    /// Resolve a logical column name under this catalog's naming.
    pub fn col(&self, logical: &str) -> String {
        self.naming.column(logical)
    }

    /// `(label, table)` for every loaded table, in a stable order.
    pub fn tables(&self) -> Vec<(String, &Table)> {
        let mut out: Vec<(String, &Table)> = vec![
            ("students".to_string(), &self.students),
            ("parents".to_string(), &self.parents),
            ("attendance".to_string(), &self.attendance),
        ];
        match &self.results {
            Results::Wide(by_sem) => {
                for (sem, t) in by_sem {
                    out.push((format!("results (semester {})", sem), t));
                }
            }
            Results::Long(t) => out.push(("results".to_string(), t)),
        }
        out.push(("syllabus".to_string(), &self.syllabus));
        for (section, t) in &self.timetables {
            out.push((format!("timetable (section {})", section), t));
        }
        out.push(("cgpa".to_string(), &self.cgpa));
        out
    }
}
