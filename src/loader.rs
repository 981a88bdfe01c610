//! Startup table loading.
//!
//! Every sheet named in `[data.sheets]` is read once, converted into an
//! immutable [`Table`], and assembled into a [`Catalog`]. Any missing file
//! or sheet aborts startup; there is no partial catalog.
//!
//! Sheets are read through the [`TableSource`] trait so the catalog
//! assembly can be exercised without a workbook on disk.
//!
//! # Cell conversion
//!
//! | Spreadsheet | Cell |
//! |-------------|------|
//! | empty, blank text, error | `Empty` |
//! | float | `Float`, then see below |
//! | date/time | `Text` |
//!
//! Numeric columns are then typed the way a dataframe reader types them:
//! a column holding only numbers stays `Float` when any value is fractional
//! or any cell is blank (so an SGPA of `9.0` still prints as `9.0`);
//! otherwise its whole floats become `Int`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use campus_assist_core::catalog::{Catalog, Results};
use campus_assist_core::extract::Section;
use campus_assist_core::models::Cell;
use campus_assist_core::router::Router;
use campus_assist_core::table::{ColumnNaming, Table};

use crate::config::{Config, Layout};

/// Something that can produce a named sheet as a [`Table`].
pub trait TableSource {
    fn load(&mut self, sheet: &str, naming: ColumnNaming) -> Result<Table>;
}

/// A `.xlsx`/`.xls`/`.ods` workbook opened with calamine.
pub struct WorkbookSource {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookSource {
    pub fn open(path: &Path) -> Result<Self> {
        let workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }
}

impl TableSource for WorkbookSource {
    fn load(&mut self, sheet: &str, naming: ColumnNaming) -> Result<Table> {
        let range = self.workbook.worksheet_range(sheet).with_context(|| {
            format!("Sheet '{}' not found in {}", sheet, self.path.display())
        })?;
        table_from_range(sheet, &range, naming)
    }
}

fn convert(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Text(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

fn is_whole(f: f64) -> bool {
    f.fract() == 0.0 && f.abs() < i64::MAX as f64
}

fn settle_numeric_columns(rows: &mut [Vec<Cell>], width: usize) {
    for col in 0..width {
        let mut blank = false;
        let mut fraction = false;
        let mut other = false;
        for row in rows.iter() {
            match &row[col] {
                Cell::Empty => blank = true,
                Cell::Float(f) if !is_whole(*f) => fraction = true,
                Cell::Int(_) | Cell::Float(_) => {}
                Cell::Text(_) | Cell::Bool(_) => other = true,
            }
        }
        if !other && (blank || fraction) {
            continue;
        }
        for row in rows.iter_mut() {
            if let Cell::Float(f) = row[col] {
                if is_whole(f) {
                    row[col] = Cell::Int(f as i64);
                }
            }
        }
    }
}

/// First row is the header; fully empty rows are skipped.
pub fn table_from_range(name: &str, range: &Range<Data>, naming: ColumnNaming) -> Result<Table> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        bail!("Sheet '{}' is empty", name);
    };
    let headers: Vec<String> = header.iter().map(|c| convert(c).to_string()).collect();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

    let mut body: Vec<Vec<Cell>> = rows
        .map(|r| r.iter().map(convert).collect::<Vec<Cell>>())
        .filter(|cells| !cells.iter().all(Cell::is_empty))
        .collect();
    settle_numeric_columns(&mut body, headers.len());

    Table::new(name, &header_refs, body, naming)
}

fn load_sheet(source: &mut dyn TableSource, sheet: &str, naming: ColumnNaming) -> Result<Table> {
    let table = source
        .load(sheet, naming)
        .with_context(|| format!("Failed to load sheet '{}'", sheet))?;
    tracing::info!(
        sheet,
        rows = table.len(),
        columns = table.headers().len(),
        "loaded table"
    );
    Ok(table)
}

/// Load every configured sheet into a catalog.
pub fn load_catalog(config: &Config, source: &mut dyn TableSource) -> Result<Catalog> {
    let naming = config.data.column_naming;
    let sheets = &config.data.sheets;

    let students = load_sheet(source, &sheets.students, naming)?;
    let parents = load_sheet(source, &sheets.parents, naming)?;
    let attendance = load_sheet(source, &sheets.attendance, naming)?;

    let results = match config.data.layout {
        Layout::Wide => {
            let mut by_sem = BTreeMap::new();
            for (i, sheet) in sheets.results.iter().enumerate() {
                by_sem.insert(i as u64 + 1, load_sheet(source, sheet, naming)?);
            }
            Results::Wide(by_sem)
        }
        Layout::Long => Results::Long(load_sheet(source, &sheets.results_long, naming)?),
    };

    let syllabus = load_sheet(source, &sheets.syllabus, naming)?;
    let mut timetables = BTreeMap::new();
    timetables.insert(Section::A, load_sheet(source, &sheets.timetable_a, naming)?);
    timetables.insert(Section::B, load_sheet(source, &sheets.timetable_b, naming)?);
    let cgpa = load_sheet(source, &sheets.cgpa, naming)?;

    Ok(Catalog {
        naming,
        students,
        parents,
        attendance,
        results,
        syllabus,
        timetables,
        cgpa,
        style: config.timetable.style(),
    })
}

/// Open the configured workbook and load the full catalog.
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    let mut source = WorkbookSource::open(&config.data.workbook)?;
    tracing::debug!(sheets = ?source.sheet_names(), "opened workbook");
    load_catalog(config, &mut source)
}

/// Catalog plus router options, ready to answer questions.
pub fn build_router(config: &Config) -> Result<Router> {
    let catalog = open_catalog(config)?;
    Ok(Router::new(Arc::new(catalog), config.chat.router_options()))
}
