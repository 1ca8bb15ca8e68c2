//! # crosswalk-cli: Crosswalk Command-Line Interface
//!
//! Provides the `crosswalk` binary over a directory of JSON files exported
//! from the gap analysis.
//!
//! ## Subcommands
//!
//! - `crosswalk analyze`: cross-standard integration report.
//! - `crosswalk suggest`: classification suggestions for one document.
//!
//! ```bash
//! crosswalk --data-dir ./data analyze --org 6f1c2a8e-3b4d-4e5f-9a0b-1c2d3e4f5a6b
//! crosswalk analyze --standard ISO14001 -vv
//! crosswalk suggest --document 0b6c7d2e-5f1a-4c3b-8d9e-7a6b5c4d3e2f
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `crosswalk-engine`; no analysis logic here.

pub mod analyze;
pub mod config;
pub mod dataset;
pub mod suggest;
