//! TOML configuration.
//!
//! Only `[data].workbook` is required; every other key falls back to the
//! values the AI & DS workbook uses.
//!
//! ```toml
//! [data]
//! workbook = "./STUDENTS_DATA_AI_DS.xlsx"
//! column_naming = "underscore"   # underscore | space
//! layout = "wide"                # wide | long
//!
//! [chat]
//! subject_code_slot = true
//! output_mode = "formatted_text" # formatted_text | raw_structured
//!
//! [server]
//! bind = "127.0.0.1:5000"
//! ```

use anyhow::{Context, Result};
use campus_assist_core::catalog::TimetableStyle;
use campus_assist_core::format::OutputMode;
use campus_assist_core::router::RouterOptions;
use campus_assist_core::table::ColumnNaming;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub timetable: TimetableConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// How semester results are laid out in the workbook.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One sheet per semester (`[data.sheets].results`).
    #[default]
    Wide,
    /// One sheet with a `SEMESTER` column (`[data.sheets].results_long`).
    Long,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub workbook: PathBuf,
    #[serde(default)]
    pub column_naming: ColumnNaming,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub sheets: SheetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SheetsConfig {
    pub students: String,
    pub parents: String,
    pub attendance: String,
    /// Wide layout: sheet `i` holds semester `i + 1`.
    pub results: Vec<String>,
    pub results_long: String,
    pub syllabus: String,
    pub timetable_a: String,
    pub timetable_b: String,
    pub cgpa: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            students: "STUDENTS_INFO".to_string(),
            parents: "PARENT_INFO".to_string(),
            attendance: "ATTENDANCE_INFO".to_string(),
            results: (1..=5).map(|n| format!("RESULTS_SEM{}_INFO", n)).collect(),
            results_long: "RESULTS_INFO".to_string(),
            syllabus: "SYLLABUS_INFO".to_string(),
            timetable_a: "TIMETABLE_AI_DS_A".to_string(),
            timetable_b: "TIMETABLE_AI_DS_B".to_string(),
            cgpa: "CGPA_AND_ARREAR_INFO".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    #[serde(default = "default_subject_code_slot")]
    pub subject_code_slot: bool,
    #[serde(default)]
    pub output_mode: OutputMode,
}

fn default_subject_code_slot() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            subject_code_slot: true,
            output_mode: OutputMode::default(),
        }
    }
}

impl ChatConfig {
    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            subject_code_slot: self.subject_code_slot,
        }
    }
}

/// Overrides for the built-in timetable colours.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TimetableConfig {
    #[serde(default)]
    pub venue_codes: Option<Vec<String>>,
    #[serde(default)]
    pub subject_colors: Option<BTreeMap<String, String>>,
}

impl TimetableConfig {
    pub fn style(&self) -> TimetableStyle {
        let mut style = TimetableStyle::default();
        if let Some(venues) = &self.venue_codes {
            style.venue_codes = venues.iter().cloned().collect();
        }
        if let Some(colors) = &self.subject_colors {
            style.subject_colors = colors
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
        }
        style
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.data.workbook.as_os_str().is_empty() {
        anyhow::bail!("data.workbook must not be empty");
    }

    if config.data.layout == Layout::Wide && config.data.sheets.results.is_empty() {
        anyhow::bail!("data.sheets.results must list at least one sheet for the wide layout");
    }

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if let Some(colors) = &config.timetable.subject_colors {
        for (subject, color) in colors {
            if !color.starts_with('#') {
                anyhow::bail!(
                    "timetable.subject_colors.{}: '{}' is not a #rrggbb colour",
                    subject,
                    color
                );
            }
        }
    }

    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}
