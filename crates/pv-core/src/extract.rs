//! Extractors: one per manuscript figure
//!
//! Required tables propagate a read error. Tables guarded by an existence
//! check contribute nothing when absent.

use crate::config::PaperConfig;
use crate::curated;
use crate::error::Result;
use crate::parser::{count_data_lines, parse_table};
use crate::values::ValueMap;

/// Column holding per-tissue gene counts in the tissue statistics tables
pub const TISSUE_GENES_COLUMN: &str = "Number_of_TUSCO_Genes";
/// Table S1 column naming the sequencing pipeline
pub const PIPELINE_COLUMN: &str = "Pipeline";
/// Table S1 cosine similarity column
pub const COSIM_COLUMN: &str = "cosim";
/// Pipelines whose name contains this are reported separately
pub const PACBIO_MARKER: &str = "PacBio";

/// Figure 1: tissue-resolved ranges and universal core sizes
pub fn extract_tusco_counts(config: &PaperConfig) -> Result<ValueMap> {
    let mut values = ValueMap::new();

    let human = parse_table(config.human_tissue_stats())?.summarize(TISSUE_GENES_COLUMN)?;
    values.insert("HUMAN_TISSUE_MIN", human.min);
    values.insert("HUMAN_TISSUE_MAX", human.max);

    let mouse = parse_table(config.mouse_tissue_stats())?.summarize(TISSUE_GENES_COLUMN)?;
    values.insert("MOUSE_TISSUE_MIN", mouse.min);
    values.insert("MOUSE_TISSUE_MAX", mouse.max);

    values.insert("HUMAN_UNIVERSAL", count_data_lines(config.human_universal())?);
    values.insert("MOUSE_UNIVERSAL", count_data_lines(config.mouse_universal())?);

    Ok(values)
}

/// Figure 3: cosine similarity ranges, plus curated RIN correlations when
/// the Figure 3c table is present
pub fn extract_figure3_values(config: &PaperConfig) -> Result<ValueMap> {
    let mut values = ValueMap::new();

    let table_s1 = parse_table(config.table_s1())?;
    let (pacbio, other) = table_s1.partition_contains(PIPELINE_COLUMN, PACBIO_MARKER)?;

    let pacbio = table_s1.summarize_rows(&pacbio, COSIM_COLUMN)?;
    values.insert("PACBIO_COSIM_MIN", pacbio.min);
    values.insert("PACBIO_COSIM_MAX", pacbio.max);

    let other = table_s1.summarize_rows(&other, COSIM_COLUMN)?;
    values.insert("OTHER_COSIM_MIN", other.min);
    values.insert("OTHER_COSIM_MAX", other.max);

    let fig3c = config.figure3c();
    if fig3c.exists() {
        // Read for validation only; the correlations are not derivable from it.
        parse_table(&fig3c)?;
        values.extend(curated::to_values(curated::FIGURE3_RIN));
    } else {
        log::debug!("{} not found, skipping RIN correlations", fig3c.display());
    }

    Ok(values)
}

/// Figure 5: curated replicate metrics when the Figure 5b/5c table is present
pub fn extract_figure5_values(config: &PaperConfig) -> Result<ValueMap> {
    let fig5 = config.figure5bc();
    if !fig5.exists() {
        log::debug!("{} not found, skipping Figure 5 values", fig5.display());
        return Ok(ValueMap::new());
    }

    parse_table(&fig5)?;
    Ok(curated::to_values(curated::FIGURE5))
}

/// A named extraction step
pub struct Extractor {
    /// Progress description, e.g. "TUSCO gene counts"
    pub name: &'static str,
    pub run: fn(&PaperConfig) -> Result<ValueMap>,
}

/// Every extractor, in figure order
pub const EXTRACTORS: &[Extractor] = &[
    Extractor {
        name: "TUSCO gene counts",
        run: extract_tusco_counts,
    },
    Extractor {
        name: "Figure 3 values",
        run: extract_figure3_values,
    },
    Extractor {
        name: "Figure 5 values",
        run: extract_figure5_values,
    },
];

/// Run every extractor in figure order and merge their values.
///
/// `on_step` is called with the 1-based step number and name before each
/// extractor runs.
pub fn extract_with_progress<F>(config: &PaperConfig, mut on_step: F) -> Result<ValueMap>
where
    F: FnMut(usize, &str),
{
    let mut values = ValueMap::new();
    for (i, extractor) in EXTRACTORS.iter().enumerate() {
        on_step(i + 1, extractor.name);
        values.extend((extractor.run)(config)?);
    }
    log::info!("extracted {} values", values.len());
    Ok(values)
}

/// Run every extractor in figure order and merge their values
pub fn extract_all(config: &PaperConfig) -> Result<ValueMap> {
    extract_with_progress(config, |_, _| {})
}
