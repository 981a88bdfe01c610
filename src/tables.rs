//! `campus tables`: list every loaded table.

use anyhow::Result;

use crate::config::Config;
use crate::loader;

pub fn list_tables(config: &Config) -> Result<()> {
    let catalog = loader::open_catalog(config)?;

    println!("Workbook: {}", config.data.workbook.display());
    println!();
    println!("{:<24} {:<24} {:>6} {:>8}", "TABLE", "SHEET", "ROWS", "COLUMNS");
    for (label, table) in catalog.tables() {
        println!(
            "{:<24} {:<24} {:>6} {:>8}",
            label,
            table.name(),
            table.len(),
            table.headers().len()
        );
    }

    Ok(())
}
