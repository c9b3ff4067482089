//! End-to-end manuscript update: extract, substitute, persist

use crate::config::PaperConfig;
use crate::error::Result;
use crate::extract::extract_all;
use crate::history::{append_run, create_run_record};
use crate::persist::{read_manuscript, write_with_backup};
use crate::substitute::{apply_substitutions, build_substitutions, SubstitutionReport, TEMPLATES};
use crate::values::ValueMap;
use std::path::PathBuf;

/// Result of an update run
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub values: ValueMap,
    pub report: SubstitutionReport,
    /// Where the pre-edit text was (or would be) saved
    pub backup: PathBuf,
    /// False for a dry run
    pub written: bool,
}

/// Extract every value and update the manuscript.
///
/// All extraction and rendering happens before the manuscript is touched, so
/// an error leaves both the manuscript and its backup unchanged. The file is
/// rewritten even when no sentence matched.
pub fn update_paper(config: &PaperConfig, dry_run: bool) -> Result<UpdateOutcome> {
    let values = extract_all(config)?;
    update_with_values(config, values, dry_run)
}

/// Update the manuscript from an already extracted value map
pub fn update_with_values(config: &PaperConfig, values: ValueMap, dry_run: bool) -> Result<UpdateOutcome> {
    let substitutions = build_substitutions(TEMPLATES, &values)?;
    let original = read_manuscript(&config.manuscript)?;
    let report = apply_substitutions(&original, &substitutions);
    let backup = config.backup_path();

    if dry_run {
        log::info!("dry run, leaving {} untouched", config.manuscript.display());
    } else {
        write_with_backup(&config.manuscript, &backup, &original, &report.text)?;
        if let Some(history) = &config.history {
            let run = create_run_record(
                &config.manuscript,
                &backup,
                &report.applied,
                &report.skipped,
                &values,
            );
            append_run(history, run)?;
        }
    }

    Ok(UpdateOutcome {
        values,
        report,
        backup,
        written: !dry_run,
    })
}

/// Whether each template's sentence is currently present in the manuscript
pub fn check_templates(config: &PaperConfig) -> Result<Vec<(&'static str, bool)>> {
    let text = read_manuscript(&config.manuscript)?;
    Ok(TEMPLATES
        .iter()
        .map(|t| (t.label, text.contains(t.original)))
        .collect())
}
