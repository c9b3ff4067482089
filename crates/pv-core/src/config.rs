//! Locations of the input tables and the manuscript

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Processed TUSCO tables, relative to the repository root
pub const DEFAULT_DATA_DIR: &str = "data/processed/tusco";
/// Figure tables, relative to the repository root
pub const DEFAULT_FIGURES_DIR: &str = "figs";
/// Manuscript text, relative to the repository root
pub const DEFAULT_MANUSCRIPT: &str = "manuscript/paper/txt/tusco_paper.txt";

/// Suffix appended to the manuscript file name for the pre-edit copy
pub const BACKUP_SUFFIX: &str = ".backup";

/// Where every input and output of a run lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperConfig {
    /// Root of the processed TUSCO tables
    pub data_root: PathBuf,
    /// Root of the per-figure table directories
    pub figures_root: PathBuf,
    /// Manuscript text file updated in place
    pub manuscript: PathBuf,
    /// Optional JSON run history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<PathBuf>,
}

impl PaperConfig {
    /// Standard layout beneath a repository root
    pub fn from_repo_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            data_root: root.join(DEFAULT_DATA_DIR),
            figures_root: root.join(DEFAULT_FIGURES_DIR),
            manuscript: root.join(DEFAULT_MANUSCRIPT),
            history: None,
        }
    }

    /// Load a config from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the config to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content).map_err(|e| Error::FileWrite {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    pub fn human_tissue_stats(&self) -> PathBuf {
        self.data_root.join("hsa/tusco_human_tissue_statistics.tsv")
    }

    pub fn mouse_tissue_stats(&self) -> PathBuf {
        self.data_root.join("mmu/tusco_mouse_tissue_statistics.tsv")
    }

    pub fn human_universal(&self) -> PathBuf {
        self.data_root.join("tusco_human.tsv")
    }

    pub fn mouse_universal(&self) -> PathBuf {
        self.data_root.join("tusco_mouse.tsv")
    }

    /// Figure 3 supplementary table S1 (cosine similarity per pipeline)
    pub fn table_s1(&self) -> PathBuf {
        self.figures_root.join("figure-03/tables/table_s1.csv")
    }

    /// Figure 3c RIN table
    pub fn figure3c(&self) -> PathBuf {
        self.figures_root.join("figure-03/tables/figure3c.tsv")
    }

    /// Figure 5b/5c replicate table
    pub fn figure5bc(&self) -> PathBuf {
        self.figures_root.join("figure-05/tables/fig-5b-5c.tsv")
    }

    /// Sibling path holding the pre-edit manuscript,
    /// e.g. `tusco_paper.txt` → `tusco_paper.txt.backup`
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .manuscript
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(BACKUP_SUFFIX);
        self.manuscript.with_file_name(name)
    }
}
