//! pv-core: keep manuscript numbers in sync with analysis result tables
//!
//! This library provides functionality to:
//! - Parse tab- and comma-delimited result tables
//! - Extract per-figure summary values (ranges, counts, curated constants)
//! - Substitute those values into fixed manuscript sentences
//! - Write the manuscript back with a backup and an optional run history

pub mod config;
pub mod curated;
pub mod error;
pub mod extract;
pub mod history;
pub mod parser;
pub mod persist;
pub mod substitute;
pub mod table;
pub mod update;
pub mod values;

pub use config::PaperConfig;
pub use error::{Error, Result};
pub use extract::{extract_all, extract_with_progress, extract_figure3_values, extract_figure5_values, extract_tusco_counts};
pub use history::{HistoryFile, RunRecord};
pub use parser::{count_data_lines, parse_delimited, parse_delimited_str, parse_table};
pub use substitute::{apply_substitutions, build_substitutions, Substitution, SubstitutionReport, TEMPLATES};
pub use table::{CellValue, Column, Row, Summary, Table};
pub use update::{check_templates, update_paper, update_with_values, UpdateOutcome};
pub use values::{Value, ValueMap};
