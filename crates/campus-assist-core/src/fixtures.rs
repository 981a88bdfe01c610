//! Small in-memory catalog shared by the unit tests.

use std::collections::BTreeMap;

use crate::catalog::{Catalog, Results, TimetableStyle};
use crate::extract::Section;
use crate::models::Cell;
use crate::table::{ColumnNaming, Table};

pub const ASHA: &str = "123456789012";
pub const BALA: &str = "210987654321";
pub const NOBODY: &str = "999999999999";

fn t(s: &str) -> Cell {
    Cell::text(s)
}

fn table(name: &str, headers: &[&str], rows: Vec<Vec<Cell>>, naming: ColumnNaming) -> Table {
    Table::new(name, headers, rows, naming).unwrap()
}

fn wide_results(naming: ColumnNaming) -> BTreeMap<u64, Table> {
    let headers = ["RRN", "Name of Student", "CSD1101", "CSD1102"];
    let mut by_sem = BTreeMap::new();
    for sem in 1..=5u64 {
        let mut rows = Vec::new();
        if sem <= 3 {
            rows.push(vec![Cell::Int(123456789012), t("Asha Rao"), t("A"), t("B+")]);
        }
        if sem <= 2 {
            rows.push(vec![Cell::Int(210987654321), t("Bala K"), t("O"), t("A+")]);
        }
        by_sem.insert(
            sem,
            table(&format!("RESULTS_SEM{}_INFO", sem), &headers, rows, naming),
        );
    }
    by_sem
}

pub fn long_results(naming: ColumnNaming) -> Table {
    table(
        "RESULTS_INFO",
        &["RRN", "Name of Student", "Semester", "GRADE 1", "GRADE 2"],
        vec![
            vec![Cell::Int(123456789012), t("Asha Rao"), Cell::Int(2), t("A"), t("O")],
            vec![Cell::Int(123456789012), t("Asha Rao"), Cell::Int(1), t("B"), t("A")],
            vec![Cell::Int(123456789012), t("Asha Rao"), Cell::Int(1), t("C"), t("C")],
            vec![Cell::Int(210987654321), t("Bala K"), Cell::Int(1), t("O"), t("O")],
        ],
        naming,
    )
}

pub fn catalog_with(naming: ColumnNaming, results: Results) -> Catalog {
    let students = table(
        "STUDENTS_INFO",
        &["RRN", "Name of Student", "Department", "Year"],
        vec![
            vec![Cell::Int(123456789012), t("Asha Rao"), t("AI&DS"), Cell::Int(3)],
            vec![Cell::Int(210987654321), t("Bala K"), t("AI&DS"), Cell::Int(3)],
        ],
        naming,
    );
    let parents = table(
        "PARENT_INFO",
        &["RRN", "Name of Student", "Father Name", "Contact"],
        vec![
            vec![Cell::Int(123456789012), t("Asha Rao"), t("Ravi Rao"), Cell::Int(9876543210)],
            vec![Cell::Int(210987654321), t("Bala K"), t("Kumar"), Cell::Int(9123456780)],
        ],
        naming,
    );
    let attendance = table(
        "ATTENDANCE_INFO",
        &["RRN", "Name of Student", "CSD3251 Attendance", "CSD3252 Attendance"],
        vec![
            vec![Cell::Int(123456789012), t("Asha Rao"), Cell::Int(92), Cell::Int(81)],
            vec![Cell::Int(210987654321), t("Bala K"), Cell::Int(75), Cell::Int(88)],
        ],
        naming,
    );
    let syllabus = table(
        "SYLLABUS_INFO",
        &["Semester", "Subject Code", "Subject Name", "Syllabus Image Link"],
        vec![
            vec![Cell::Int(5), t("CSD3251"), t("Deep Learning"), t("http://img/csd3251.png")],
            vec![Cell::Int(5), t(" csd3252 "), t("NLP"), Cell::Empty],
            vec![Cell::Int(4), t("CSD631"), t("Cloud"), t("http://img/csd631.png")],
        ],
        naming,
    );
    let timetable_a = table(
        "TIMETABLE_AI_DS_A",
        &["Day", "9-10", "10-11"],
        vec![
            vec![t("MON"), t("CSD3251"), t("LS002/CSD631")],
            vec![t("TUE"), t("LS003"), Cell::Empty],
        ],
        naming,
    );
    let timetable_b = table(
        "TIMETABLE_AI_DS_B",
        &["Day", "9-10"],
        vec![vec![t("MON"), t("CSD3252")]],
        naming,
    );
    let cgpa = table(
        "CGPA_AND_ARREAR_INFO",
        &[
            "RRN",
            "Name of Student",
            "CGPA",
            "Number of Arrears",
            "Status",
            "Semester 1 SGPA",
            "Semester 2 SGPA",
        ],
        vec![
            vec![
                Cell::Int(123456789012),
                t("Asha Rao"),
                Cell::Float(8.42),
                Cell::Float(1.0),
                t("Active"),
                Cell::Float(8.1),
                Cell::Float(8.6),
            ],
            vec![
                Cell::Int(210987654321),
                t("Bala K"),
                Cell::Float(9.1),
                Cell::Empty,
                t("Active"),
                Cell::Float(9.0),
                Cell::Float(9.2),
            ],
        ],
        naming,
    );

    let mut timetables = BTreeMap::new();
    timetables.insert(Section::A, timetable_a);
    timetables.insert(Section::B, timetable_b);

    Catalog {
        naming,
        students,
        parents,
        attendance,
        results,
        syllabus,
        timetables,
        cgpa,
        style: TimetableStyle::default(),
    }
}

pub fn wide_catalog() -> Catalog {
    catalog_with(
        ColumnNaming::Underscore,
        Results::Wide(wide_results(ColumnNaming::Underscore)),
    )
}

pub fn long_catalog() -> Catalog {
    catalog_with(
        ColumnNaming::Space,
        Results::Long(long_results(ColumnNaming::Space)),
    )
}
