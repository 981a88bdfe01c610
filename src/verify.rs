//! `campus verify`: every key in the loaded data must resolve.

use anyhow::{bail, Result};
use campus_assist_core::coverage::coverage;

use crate::config::Config;
use crate::loader;

pub fn run_verify(config: &Config) -> Result<()> {
    let catalog = loader::open_catalog(config)?;
    let report = coverage(&catalog);

    for miss in &report.misses {
        println!("MISS  {:<24} {:<14} {}", miss.table, miss.key, miss.message);
    }
    println!(
        "checked {} keys, {} unresolved",
        report.checked,
        report.misses.len()
    );

    if !report.is_clean() {
        bail!("{} keys did not resolve", report.misses.len());
    }
    Ok(())
}
