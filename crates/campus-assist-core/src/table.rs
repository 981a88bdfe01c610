//! Immutable record tables.
//!
//! A [`Table`] is one spreadsheet sheet: a normalised header plus rows of
//! [`Cell`]s. Tables are built once at startup and never mutated; every
//! lookup is a linear scan returning the first matching row.
//!
//! # Column naming
//!
//! Header names are trimmed, upper-cased and have every internal whitespace
//! run collapsed to a single separator. [`ColumnNaming`] picks the
//! separator. Lookups refer to columns by their underscore spelling
//! (`NAME_OF_STUDENT`) and translate through [`ColumnNaming::column`].

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::models::{Cell, Fields};

/// Separator used when normalising header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnNaming {
    /// `Name of Student` → `NAME_OF_STUDENT`
    #[default]
    Underscore,
    /// `Name of Student` → `NAME OF STUDENT`
    Space,
}

impl ColumnNaming {
    fn separator(self) -> &'static str {
        match self {
            ColumnNaming::Underscore => "_",
            ColumnNaming::Space => " ",
        }
    }

    /// Normalise a raw header cell. Blank headers become `UNNAMED_<index>`.
    pub fn normalize(self, raw: &str, index: usize) -> String {
        let words: Vec<String> = raw.split_whitespace().map(|w| w.to_uppercase()).collect();
        if words.is_empty() {
            return format!("UNNAMED{}{}", self.separator(), index);
        }
        words.join(self.separator())
    }

    /// Translate a logical (underscore-spelled) column name into this naming.
    pub fn column(self, logical: &str) -> String {
        match self {
            ColumnNaming::Underscore => logical.to_string(),
            ColumnNaming::Space => logical.replace('_', " "),
        }
    }
}

/// One loaded sheet.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, normalising `headers` with `naming`.
    ///
    /// Every row must have exactly as many cells as there are headers.
    pub fn new(
        name: impl Into<String>,
        headers: &[&str],
        rows: Vec<Vec<Cell>>,
        naming: ColumnNaming,
    ) -> Result<Self> {
        let name = name.into();
        let headers: Vec<String> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| naming.normalize(h, i))
            .collect();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                bail!(
                    "table {}: row {} has {} cells, expected {}",
                    name,
                    i + 1,
                    row.len(),
                    headers.len()
                );
            }
        }
        Ok(Self {
            name,
            headers,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row { table: self, cells })
    }

    /// First row whose `column`, compared as text, equals `key`.
    pub fn find_first(&self, column: &str, key: &str) -> Option<Row<'_>> {
        let idx = self.column_index(column)?;
        self.rows().find(|r| r.cells[idx].key_text() == key)
    }

    /// All rows whose `column`, compared as text, equals `key`, in table order.
    pub fn find_all(&self, column: &str, key: &str) -> Vec<Row<'_>> {
        match self.column_index(column) {
            Some(idx) => self
                .rows()
                .filter(|r| r.cells[idx].key_text() == key)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every value of `column` in table order; empty if the column is absent.
    pub fn column_values(&self, column: &str) -> Vec<&Cell> {
        match self.column_index(column) {
            Some(idx) => self.rows.iter().map(|r| &r[idx]).collect(),
            None => Vec::new(),
        }
    }
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        self.table.column_index(column).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    /// All `(column, value)` pairs except the listed columns, in header order.
    pub fn fields_except(&self, skip: &[String]) -> Fields {
        self.table
            .headers
            .iter()
            .zip(self.cells.iter())
            .filter(|(h, _)| !skip.contains(h))
            .map(|(h, c)| (h.clone(), c.clone()))
            .collect()
    }
}
