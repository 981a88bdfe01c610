//! # Campus Assist
//!
//! A spreadsheet-backed chatbot that answers questions about student
//! records: personal and parent details, attendance, results, CGPA/SGPA,
//! syllabus and timetable.
//!
//! All question handling lives in [`campus_assist_core`]. This crate loads
//! the workbook once at startup and exposes the answers over HTTP and the
//! `campus` CLI.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────┐   ┌──────────────────────────┐
//! │   Workbook   │──▶│  Loader   │──▶│ Catalog (read-only, Arc) │
//! │ .xlsx sheets │   │ calamine  │   └────────────┬─────────────┘
//! └──────────────┘   └───────────┘                │
//!                                   ┌─────────────┤
//!                                   ▼             ▼
//!                             ┌──────────┐  ┌──────────┐
//!                             │   CLI    │  │   HTTP   │
//!                             │ (campus) │  │ POST /ask│
//!                             └──────────┘  └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! campus tables                                   # check the workbook loads
//! campus ask "attendance for 123456789012"        # one-shot answer
//! campus verify                                   # every key resolves
//! campus serve                                    # start HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`loader`] | Workbook → catalog |
//! | [`server`] | HTTP server |
//! | [`ask`] | One-shot answers |
//! | [`tables`] | Loaded table listing |
//! | [`verify`] | Key coverage check |

pub mod ask;
pub mod config;
pub mod loader;
pub mod server;
pub mod tables;
pub mod verify;
