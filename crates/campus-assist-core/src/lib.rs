//! # Campus Assist Core
//!
//! Pure question-answering logic for Campus Assist: the table model, slot
//! extraction, per-domain lookups, HTML rendering, intent routing and
//! response formatting.
//!
//! This crate does no I/O. Tables are handed in already loaded (see the
//! root crate's loader) and every operation is a synchronous scan of one
//! immutable table.
//!
//! ```text
//! question ─▶ extract ─▶ router ─▶ lookup ─▶ format ─▶ response
//!                                    │
//!                                 catalog (read-only)
//! ```

pub mod catalog;
pub mod coverage;
pub mod extract;
pub mod format;
pub mod lookup;
pub mod models;
pub mod render;
pub mod router;
pub mod table;

#[cfg(test)]
mod fixtures;
