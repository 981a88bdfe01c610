//! Loaded-data coverage check.
//!
//! Every key present in a keyed table must resolve through its lookup.
//! A miss here means the lookup and the loaded data disagree (a column
//! naming mismatch, a key stored in an unexpected form).

use std::collections::BTreeSet;

use crate::catalog::{Catalog, Results};
use crate::lookup::{self, RRN, SEMESTER};
use crate::models::{Answer, Cell};
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMiss {
    pub table: String,
    pub key: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct CoverageReport {
    pub checked: usize,
    pub misses: Vec<CoverageMiss>,
}

impl CoverageReport {
    pub fn is_clean(&self) -> bool {
        self.misses.is_empty()
    }

    fn check(&mut self, table: &Table, key: String, answer: Answer) {
        self.checked += 1;
        if let Answer::Message { text, .. } = &answer {
            if answer.is_not_found() {
                self.misses.push(CoverageMiss {
                    table: table.name().to_string(),
                    key,
                    message: text.clone(),
                });
            }
        }
    }
}

fn keys(table: &Table, column: &str) -> Vec<String> {
    table
        .column_values(column)
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(Cell::key_text)
        .collect()
}

/// Look up every key of every keyed table.
pub fn coverage(catalog: &Catalog) -> CoverageReport {
    let mut report = CoverageReport::default();
    let rrn_col = catalog.col(RRN);

    for rrn in keys(&catalog.students, &rrn_col) {
        let a = lookup::student_info(catalog, &rrn);
        report.check(&catalog.students, rrn, a);
    }
    for rrn in keys(&catalog.parents, &rrn_col) {
        let a = lookup::parent_info(catalog, &rrn);
        report.check(&catalog.parents, rrn, a);
    }
    for rrn in keys(&catalog.attendance, &rrn_col) {
        let a = lookup::attendance(catalog, &rrn, None);
        report.check(&catalog.attendance, rrn, a);
    }
    for rrn in keys(&catalog.cgpa, &rrn_col) {
        let a = lookup::cgpa_arrears(catalog, &rrn);
        report.check(&catalog.cgpa, rrn, a);
    }
    match &catalog.results {
        Results::Wide(by_sem) => {
            for (sem, table) in by_sem {
                for rrn in keys(table, &rrn_col) {
                    let a = lookup::result(catalog, &rrn, Some(*sem));
                    report.check(table, rrn, a);
                }
            }
        }
        Results::Long(table) => {
            let unique: BTreeSet<String> = keys(table, &rrn_col).into_iter().collect();
            for rrn in unique {
                let a = lookup::result(catalog, &rrn, None);
                report.check(table, rrn, a);
            }
        }
    }

    let semesters: BTreeSet<u64> = catalog
        .syllabus
        .column_values(&catalog.col(SEMESTER))
        .into_iter()
        .filter_map(Cell::as_i64)
        .filter_map(|s| u64::try_from(s).ok())
        .collect();
    for sem in semesters {
        let a = lookup::syllabus_for_semester(catalog, sem);
        report.check(&catalog.syllabus, sem.to_string(), a);
    }

    report
}
