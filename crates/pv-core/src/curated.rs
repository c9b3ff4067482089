//! Manually curated constants
//!
//! These numbers are reported in the manuscript but cannot be recomputed from
//! the tables this tool reads. They are kept apart from extracted values so a
//! reviewer can see which figures are not reproducible from data alone. Each
//! group is only emitted when its companion table exists.

use crate::values::{Value, ValueMap};

/// A literal value with a note on where it came from
#[derive(Debug, Clone, Copy)]
pub struct Curated {
    pub key: &'static str,
    pub value: Literal,
    pub provenance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        match lit {
            Literal::Int(i) => Value::Integer(i),
            Literal::Float(f) => Value::Float(f),
            Literal::Text(s) => Value::Text(s.to_string()),
        }
    }
}

const fn float(key: &'static str, value: f64, provenance: &'static str) -> Curated {
    Curated {
        key,
        value: Literal::Float(value),
        provenance,
    }
}

const RIN_TEXT: &str = "Figure 3c manuscript text; correlation not stored in figure3c.tsv";
const FIG5_1REP: &str = "Figure 5b/5c manuscript text, single replicate";
const FIG5_2REP: &str = "Figure 5b/5c manuscript text, two replicates";
const FIG5_NREP: &str = "Figure 5b/5c manuscript text, 3-5 replicates";
const FIG5_TISSUE: &str = "Figure 5 manuscript text, tissue-specific gene sets";

/// TUSCO and SIRV/sequins correlation with RNA integrity (Figure 3c)
pub const FIGURE3_RIN: &[Curated] = &[
    float("TUSCO_RIN_R", 0.881, RIN_TEXT),
    Curated {
        key: "TUSCO_RIN_P",
        value: Literal::Text("1.41 × 10⁻⁶"),
        provenance: RIN_TEXT,
    },
    float("SEQUINS_RIN_R", 0.075, RIN_TEXT),
    float("SEQUINS_RIN_P", 0.77, RIN_TEXT),
];

/// Replicate-level sensitivity, precision, PDR and FDR for brain and kidney
/// (Figure 5b/5c)
pub const FIGURE5: &[Curated] = &[
    float("BRAIN_SN_1REP", 81.3, FIG5_1REP),
    float("BRAIN_SN_CI_LOW_1REP", 74.5, FIG5_1REP),
    float("BRAIN_SN_CI_HIGH_1REP", 88.0, FIG5_1REP),
    float("BRAIN_PDR_1REP", 93.1, FIG5_1REP),
    float("BRAIN_PDR_CI_LOW", 89.9, FIG5_1REP),
    float("BRAIN_PDR_CI_HIGH", 96.4, FIG5_1REP),
    float("BRAIN_PRE_1REP", 67.1, FIG5_1REP),
    float("BRAIN_PRE_CI_LOW", 61.4, FIG5_1REP),
    float("BRAIN_PRE_CI_HIGH", 72.8, FIG5_1REP),
    float("BRAIN_FDR_1REP", 32.9, FIG5_1REP),
    float("KIDNEY_SN_1REP", 71.9, FIG5_1REP),
    float("KIDNEY_SN_CI_LOW_1REP", 66.4, FIG5_1REP),
    float("KIDNEY_SN_CI_HIGH_1REP", 77.4, FIG5_1REP),
    float("KIDNEY_PDR_1REP", 90.6, FIG5_1REP),
    float("KIDNEY_PDR_CI_LOW", 85.9, FIG5_1REP),
    float("KIDNEY_PDR_CI_HIGH", 95.4, FIG5_1REP),
    float("KIDNEY_PRE_1REP", 65.2, FIG5_1REP),
    float("KIDNEY_PRE_CI_LOW", 61.0, FIG5_1REP),
    float("KIDNEY_PRE_CI_HIGH", 69.4, FIG5_1REP),
    float("KIDNEY_FDR_1REP", 34.8, FIG5_1REP),
    float("BRAIN_PRE_2REP", 87.8, FIG5_2REP),
    float("BRAIN_PRE_2REP_CI_LOW", 86.5, FIG5_2REP),
    float("BRAIN_PRE_2REP_CI_HIGH", 89.1, FIG5_2REP),
    float("BRAIN_FDR_2REP", 12.2, FIG5_2REP),
    float("BRAIN_SN_2REP", 81.3, FIG5_2REP),
    float("BRAIN_SN_2REP_CI_LOW", 79.4, FIG5_2REP),
    float("BRAIN_SN_2REP_CI_HIGH", 83.1, FIG5_2REP),
    float("KIDNEY_PRE_2REP", 81.0, FIG5_2REP),
    float("KIDNEY_PRE_2REP_CI_LOW", 79.2, FIG5_2REP),
    float("KIDNEY_PRE_2REP_CI_HIGH", 82.8, FIG5_2REP),
    float("KIDNEY_FDR_2REP", 19.0, FIG5_2REP),
    float("KIDNEY_SN_2REP", 70.6, FIG5_2REP),
    float("KIDNEY_SN_2REP_CI_LOW", 67.8, FIG5_2REP),
    float("KIDNEY_SN_2REP_CI_HIGH", 73.5, FIG5_2REP),
    float("BRAIN_PRE_3REP", 88.7, FIG5_NREP),
    float("BRAIN_PRE_5REP", 89.3, FIG5_NREP),
    float("BRAIN_SN_3REP", 83.1, FIG5_NREP),
    float("BRAIN_SN_5REP", 84.4, FIG5_NREP),
    float("KIDNEY_SN_5REP", 78.1, FIG5_NREP),
    Curated {
        key: "KIDNEY_PRE_RANGE",
        value: Literal::Text("79–81"),
        provenance: FIG5_NREP,
    },
    Curated {
        key: "BRAIN_TISSUE_GENES",
        value: Literal::Int(65),
        provenance: FIG5_TISSUE,
    },
    Curated {
        key: "KIDNEY_TISSUE_GENES",
        value: Literal::Int(46),
        provenance: FIG5_TISSUE,
    },
    float("BRAIN_COSIM", 0.9999, FIG5_TISSUE),
    float("KIDNEY_COSIM", 0.9992, FIG5_TISSUE),
];

/// Collect a curated group into a value map
pub fn to_values(group: &[Curated]) -> ValueMap {
    let mut values = ValueMap::new();
    for c in group {
        values.insert(c.key, c.value);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_unique_across_groups() {
        let mut seen = HashSet::new();
        for c in FIGURE3_RIN.iter().chain(FIGURE5) {
            assert!(seen.insert(c.key), "duplicate curated key {}", c.key);
            assert!(!c.provenance.is_empty());
        }
    }

    #[test]
    fn test_to_values() {
        let values = to_values(FIGURE3_RIN);
        assert_eq!(values.len(), 4);
        assert_eq!(values.get("TUSCO_RIN_R"), Some(&Value::Float(0.881)));
        assert_eq!(
            values.get("TUSCO_RIN_P"),
            Some(&Value::Text("1.41 × 10⁻⁶".to_string()))
        );

        let values = to_values(FIGURE5);
        assert_eq!(values.len(), 44);
        assert_eq!(values.get("BRAIN_TISSUE_GENES"), Some(&Value::Integer(65)));
    }
}
