//! Table lookup functions, one per data domain.
//!
//! Every lookup scans a single table for the first row whose identity
//! column equals the key. A hit becomes a record carrying at least
//! `Student Name` and the key; a miss becomes a domain-specific
//! [`MessageKind::NotFound`](crate::models::MessageKind::NotFound) answer.
//! Lookups never fail.

use std::collections::BTreeMap;

use crate::catalog::{Catalog, Results};
use crate::extract::Section;
use crate::models::{Answer, Cell, Entry};
use crate::render;
use crate::table::Row;

pub const RRN: &str = "RRN";
pub const NAME_OF_STUDENT: &str = "NAME_OF_STUDENT";
pub const SEMESTER: &str = "SEMESTER";
pub const SUBJECT_CODE: &str = "SUBJECT_CODE";
pub const SYLLABUS_IMAGE_LINK: &str = "SYLLABUS_IMAGE_LINK";
pub const CGPA: &str = "CGPA";
pub const NUMBER_OF_ARREARS: &str = "NUMBER_OF_ARREARS";
pub const STATUS: &str = "STATUS";

pub const STUDENT_NOT_FOUND: &str = "Student not found for the provided RRN.";
pub const PARENT_NOT_FOUND: &str = "Parent info not found for the provided RRN.";
pub const ATTENDANCE_NOT_FOUND: &str = "Attendance not found for the provided RRN.";
pub const RESULT_NOT_FOUND: &str = "Result not found for the provided RRN.";
pub const INVALID_SEMESTER: &str = "Invalid semester. Please specify a valid semester number.";
pub const CGPA_NOT_FOUND: &str = "CGPA or arrear info not found for the provided RRN.";
pub const TIMETABLE_NOT_FOUND: &str = "No timetable data found.";

fn student_name(catalog: &Catalog, row: &Row<'_>) -> Cell {
    row.get(&catalog.col(NAME_OF_STUDENT))
        .cloned()
        .unwrap_or_else(|| Cell::text("N/A"))
}

fn header(catalog: &Catalog, row: &Row<'_>, rrn: &str) -> Vec<(String, Entry)> {
    vec![
        (
            "Student Name".to_string(),
            Entry::Value(student_name(catalog, row)),
        ),
        ("RRN".to_string(), Entry::Value(Cell::text(rrn))),
    ]
}

fn semester_cell(semester: u64) -> Cell {
    i64::try_from(semester)
        .map(Cell::Int)
        .unwrap_or_else(|_| Cell::text(semester.to_string()))
}

/// Arrears as a whole number; anything unreadable counts as zero.
fn coerce_count(cell: Option<&Cell>) -> i64 {
    match cell {
        Some(Cell::Int(i)) => *i,
        Some(Cell::Float(f)) if f.is_finite() => f.trunc() as i64,
        Some(Cell::Text(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

pub fn student_info(catalog: &Catalog, rrn: &str) -> Answer {
    let rrn_col = catalog.col(RRN);
    match catalog.students.find_first(&rrn_col, rrn) {
        Some(row) => {
            let mut entries = header(catalog, &row, rrn);
            entries.push((
                "Student Info".to_string(),
                Entry::Group(row.fields_except(&[rrn_col])),
            ));
            Answer::Nested(entries)
        }
        None => Answer::not_found(STUDENT_NOT_FOUND),
    }
}

pub fn parent_info(catalog: &Catalog, rrn: &str) -> Answer {
    let rrn_col = catalog.col(RRN);
    match catalog.parents.find_first(&rrn_col, rrn) {
        Some(row) => {
            let mut entries = header(catalog, &row, rrn);
            entries.push((
                "Parent Info".to_string(),
                Entry::Group(row.fields_except(&[rrn_col])),
            ));
            Answer::Nested(entries)
        }
        None => Answer::not_found(PARENT_NOT_FOUND),
    }
}

/// Attendance for one student, optionally narrowed to the columns whose
/// name contains `subject_code`.
pub fn attendance(catalog: &Catalog, rrn: &str, subject_code: Option<&str>) -> Answer {
    let rrn_col = catalog.col(RRN);
    let Some(row) = catalog.attendance.find_first(&rrn_col, rrn) else {
        return Answer::not_found(ATTENDANCE_NOT_FOUND);
    };
    let full = row.fields_except(&[rrn_col, catalog.col(NAME_OF_STUDENT)]);

    let (label, group) = match subject_code {
        Some(code) => {
            let filtered: Vec<(String, Cell)> =
                full.into_iter().filter(|(k, _)| k.contains(code)).collect();
            if filtered.is_empty() {
                return Answer::Flat(vec![
                    ("Student Name".to_string(), student_name(catalog, &row)),
                    ("RRN".to_string(), Cell::text(rrn)),
                    (
                        "response".to_string(),
                        Cell::text(format!(
                            "No attendance data found for subject code {}.",
                            code
                        )),
                    ),
                ]);
            }
            (format!("Attendance for {}", code), filtered)
        }
        None => ("Attendance".to_string(), full),
    };
    let mut entries = header(catalog, &row, rrn);
    entries.push((label, Entry::Group(group)));
    Answer::Nested(entries)
}

/// Semester results, resolved by the catalog's results layout.
pub fn result(catalog: &Catalog, rrn: &str, semester: Option<u64>) -> Answer {
    match &catalog.results {
        Results::Wide(by_sem) => {
            let Some(sem) = semester else {
                return Answer::missing_slot(INVALID_SEMESTER);
            };
            let Some(table) = by_sem.get(&sem) else {
                return Answer::invalid_slot(INVALID_SEMESTER);
            };
            let rrn_col = catalog.col(RRN);
            let Some(row) = table.find_first(&rrn_col, rrn) else {
                return Answer::not_found(RESULT_NOT_FOUND);
            };
            let mut entries = header(catalog, &row, rrn);
            entries.push((
                format!("Semester {} Result", sem),
                Entry::Group(row.fields_except(&[rrn_col, catalog.col(NAME_OF_STUDENT)])),
            ));
            Answer::Nested(entries)
        }
        Results::Long(table) => {
            let rrn_col = catalog.col(RRN);
            let sem_col = catalog.col(SEMESTER);
            let skip = [rrn_col.clone(), catalog.col(NAME_OF_STUDENT), sem_col.clone()];
            let rows = table.find_all(&rrn_col, rrn);

            // first row per semester, ascending
            let mut by_sem: BTreeMap<i64, Row<'_>> = BTreeMap::new();
            for row in &rows {
                if let Some(s) = row.get(&sem_col).and_then(Cell::as_i64) {
                    by_sem.entry(s).or_insert(*row);
                }
            }

            match semester {
                Some(sem) => {
                    let Some(row) = i64::try_from(sem).ok().and_then(|s| by_sem.get(&s)) else {
                        return Answer::not_found(RESULT_NOT_FOUND);
                    };
                    let mut entries = header(catalog, row, rrn);
                    entries.push((
                        format!("Semester {} Result", sem),
                        Entry::Group(row.fields_except(&skip)),
                    ));
                    Answer::Nested(entries)
                }
                None => {
                    let Some(first) = by_sem.values().next() else {
                        return Answer::not_found(RESULT_NOT_FOUND);
                    };
                    let mut entries = header(catalog, first, rrn);
                    for (sem, row) in &by_sem {
                        entries.push((
                            format!("Semester {}", sem),
                            Entry::Group(row.fields_except(&skip)),
                        ));
                    }
                    Answer::Nested(entries)
                }
            }
        }
    }
}

/// SGPA from the `SEMESTER_<n>_SGPA` column of the CGPA table.
pub fn sgpa(catalog: &Catalog, rrn: &str, semester: u64) -> Answer {
    let column = catalog.col(&format!("SEMESTER_{}_SGPA", semester));
    let row = catalog.cgpa.find_first(&catalog.col(RRN), rrn);
    match row {
        Some(row) if catalog.cgpa.has_column(&column) => Answer::Flat(vec![
            ("Student Name".to_string(), student_name(catalog, &row)),
            ("RRN".to_string(), Cell::text(rrn)),
            ("Semester".to_string(), semester_cell(semester)),
            (
                "SGPA".to_string(),
                row.get(&column).cloned().unwrap_or(Cell::Empty),
            ),
        ]),
        _ => Answer::not_found(format!(
            "SGPA for semester {} not found for RRN {}.",
            semester, rrn
        )),
    }
}

pub fn cgpa_arrears(catalog: &Catalog, rrn: &str) -> Answer {
    match catalog.cgpa.find_first(&catalog.col(RRN), rrn) {
        Some(row) => Answer::Flat(vec![
            ("Student Name".to_string(), student_name(catalog, &row)),
            ("RRN".to_string(), Cell::text(rrn)),
            (
                "CGPA".to_string(),
                row.get(&catalog.col(CGPA))
                    .cloned()
                    .unwrap_or_else(|| Cell::text("N/A")),
            ),
            (
                "Number of Arrears".to_string(),
                Cell::Int(coerce_count(row.get(&catalog.col(NUMBER_OF_ARREARS)))),
            ),
            (
                "Status".to_string(),
                row.get(&catalog.col(STATUS))
                    .cloned()
                    .unwrap_or_else(|| Cell::text("")),
            ),
        ]),
        None => Answer::not_found(CGPA_NOT_FOUND),
    }
}

pub fn syllabus_for_semester(catalog: &Catalog, semester: u64) -> Answer {
    let sem_col = catalog.col(SEMESTER);
    let rows: Vec<Row<'_>> = catalog
        .syllabus
        .rows()
        .filter(|r| {
            r.get(&sem_col)
                .and_then(Cell::as_i64)
                .and_then(|s| u64::try_from(s).ok())
                == Some(semester)
        })
        .collect();
    if rows.is_empty() {
        return Answer::not_found(format!(
            "No syllabus data found for semester {}.",
            semester
        ));
    }
    Answer::Markup(render::syllabus_table(
        &catalog.syllabus,
        &rows,
        &catalog.col(SUBJECT_CODE),
        &catalog.col(SYLLABUS_IMAGE_LINK),
    ))
}

/// Syllabus image for an exact (trimmed, upper-cased) subject code.
pub fn syllabus_image(catalog: &Catalog, subject_code: &str) -> Answer {
    let wanted = subject_code.trim().to_uppercase();
    let code_col = catalog.col(SUBJECT_CODE);
    let found = catalog.syllabus.rows().find(|r| {
        r.get(&code_col)
            .map(|c| c.to_string().trim().to_uppercase() == wanted)
            .unwrap_or(false)
    });
    match found {
        Some(row) => match row
            .get(&catalog.col(SYLLABUS_IMAGE_LINK))
            .filter(|c| !c.is_empty())
        {
            Some(link) => Answer::Markup(render::syllabus_image(&link.to_string(), subject_code)),
            None => Answer::not_found(format!(
                "No syllabus image link found for course {}.",
                subject_code
            )),
        },
        None => Answer::not_found(format!(
            "No syllabus found for subject code {}.",
            subject_code
        )),
    }
}

pub fn timetable(catalog: &Catalog, section: Section) -> Answer {
    match catalog.timetables.get(&section) {
        Some(table) => Answer::Markup(render::timetable(section, table, &catalog.style)),
        None => Answer::not_found(TIMETABLE_NOT_FOUND),
    }
}
