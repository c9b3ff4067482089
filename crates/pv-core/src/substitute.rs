//! Literal sentence substitution
//!
//! Every template pairs a sentence expected verbatim in the manuscript with a
//! renderer that builds its replacement from the extracted values. A template
//! whose sentence is absent is skipped and leaves the text untouched.

use crate::error::Result;
use crate::values::ValueMap;

/// Decimals used for cosine similarity scores
pub const COSIM_DECIMALS: usize = 4;

/// A fixed sentence and how to rewrite it
pub struct Template {
    /// Short human-readable name, printed when applied
    pub label: &'static str,
    /// Sentence as it must appear in the manuscript
    pub original: &'static str,
    render: fn(&ValueMap) -> Result<String>,
}

impl Template {
    /// Build the replacement sentence from `values`
    pub fn render(&self, values: &ValueMap) -> Result<String> {
        (self.render)(values)
    }
}

fn render_gene_counts(v: &ValueMap) -> Result<String> {
    Ok(format!(
        "This process yielded tissue-resolved TUSCO gene sets (human: {}–{} per tissue; mouse: {}–{}) and universal cores (human n = {}; mouse n = {})",
        v.require("HUMAN_TISSUE_MIN")?,
        v.require("HUMAN_TISSUE_MAX")?,
        v.require("MOUSE_TISSUE_MIN")?,
        v.require("MOUSE_TISSUE_MAX")?,
        v.require("HUMAN_UNIVERSAL")?,
        v.require("MOUSE_UNIVERSAL")?,
    ))
}

fn render_pacbio_cosim(v: &ValueMap) -> Result<String> {
    Ok(format!(
        "consistently achieved cosim values ranging from {} to {} in both human and mouse samples",
        v.fixed("PACBIO_COSIM_MIN", COSIM_DECIMALS)?,
        v.fixed("PACBIO_COSIM_MAX", COSIM_DECIMALS)?,
    ))
}

fn render_other_cosim(v: &ValueMap) -> Result<String> {
    Ok(format!(
        "also exhibited high agreement (cosim: {}–{})",
        v.fixed("OTHER_COSIM_MIN", COSIM_DECIMALS)?,
        v.fixed("OTHER_COSIM_MAX", COSIM_DECIMALS)?,
    ))
}

/// Manuscript sentences kept in sync, in application order
pub const TEMPLATES: &[Template] = &[
    Template {
        label: "Figure 1 gene counts",
        original: "This process yielded tissue-resolved TUSCO gene sets (human: 60–187 per tissue; mouse: 28–67) and universal cores (human n = 50; mouse n = 32)",
        render: render_gene_counts,
    },
    Template {
        label: "PacBio cosine similarity",
        original: "consistently achieved cosim values near unity in both human and mouse samples",
        render: render_pacbio_cosim,
    },
    Template {
        label: "other cosine similarity range",
        original: "also exhibited high agreement (cosim: 0.9553–0.9977)",
        render: render_other_cosim,
    },
];

/// A rendered template ready to apply
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    pub label: &'static str,
    pub original: &'static str,
    pub replacement: String,
}

/// Render every template. Fails if a template needs a value that was not
/// extracted, so nothing is written for an incomplete value map.
pub fn build_substitutions(templates: &[Template], values: &ValueMap) -> Result<Vec<Substitution>> {
    templates
        .iter()
        .map(|t| {
            Ok(Substitution {
                label: t.label,
                original: t.original,
                replacement: t.render(values)?,
            })
        })
        .collect()
}

/// Outcome of applying substitutions to a text
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionReport {
    /// Text after every applicable substitution
    pub text: String,
    /// Labels of substitutions whose sentence was found
    pub applied: Vec<&'static str>,
    /// Labels of substitutions whose sentence was absent
    pub skipped: Vec<&'static str>,
}

impl SubstitutionReport {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Apply substitutions in order; each one replaces every occurrence of its
/// sentence or, if the sentence is absent, does nothing.
pub fn apply_substitutions(text: &str, substitutions: &[Substitution]) -> SubstitutionReport {
    let mut report = SubstitutionReport {
        text: text.to_string(),
        applied: Vec::new(),
        skipped: Vec::new(),
    };

    for sub in substitutions {
        if report.text.contains(sub.original) {
            report.text = report.text.replace(sub.original, &sub.replacement);
            report.applied.push(sub.label);
        } else {
            log::debug!("sentence for '{}' not found, skipping", sub.label);
            report.skipped.push(sub.label);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_values() -> ValueMap {
        let mut v = ValueMap::new();
        v.insert("HUMAN_TISSUE_MIN", 60_i64);
        v.insert("HUMAN_TISSUE_MAX", 187_i64);
        v.insert("MOUSE_TISSUE_MIN", 28_i64);
        v.insert("MOUSE_TISSUE_MAX", 67_i64);
        v.insert("HUMAN_UNIVERSAL", 50_i64);
        v.insert("MOUSE_UNIVERSAL", 32_i64);
        v.insert("PACBIO_COSIM_MIN", 0.99512_f64);
        v.insert("PACBIO_COSIM_MAX", 0.99871_f64);
        v.insert("OTHER_COSIM_MIN", 0.95531_f64);
        v.insert("OTHER_COSIM_MAX", 0.9977_f64);
        v
    }

    #[test]
    fn test_gene_counts_sentence() {
        let subs = build_substitutions(TEMPLATES, &sample_values()).unwrap();
        assert!(subs[0].replacement.contains(
            "(human: 60–187 per tissue; mouse: 28–67) and universal cores (human n = 50; mouse n = 32)"
        ));
    }

    #[test]
    fn test_cosim_four_decimals() {
        let subs = build_substitutions(TEMPLATES, &sample_values()).unwrap();
        assert_eq!(
            subs[1].replacement,
            "consistently achieved cosim values ranging from 0.9951 to 0.9987 in both human and mouse samples"
        );
        assert_eq!(
            subs[2].replacement,
            "also exhibited high agreement (cosim: 0.9553–0.9977)"
        );
    }

    #[test]
    fn test_missing_value_fails_render() {
        let mut values = ValueMap::new();
        for (k, val) in sample_values().iter().filter(|(k, _)| *k != "MOUSE_UNIVERSAL") {
            values.insert(k, val.clone());
        }
        assert!(matches!(
            build_substitutions(TEMPLATES, &values),
            Err(Error::MissingValue(key)) if key == "MOUSE_UNIVERSAL"
        ));
    }

    #[test]
    fn test_absent_sentence_is_noop() {
        let subs = build_substitutions(TEMPLATES, &sample_values()).unwrap();
        let text = "Nothing to see here.\n";
        let report = apply_substitutions(text, &subs);
        assert_eq!(report.text, text);
        assert!(!report.changed());
        assert_eq!(report.skipped.len(), TEMPLATES.len());
    }

    #[test]
    fn test_apply_selected_and_reapply_converges() {
        let subs = build_substitutions(TEMPLATES, &sample_values()).unwrap();
        let text = format!("Intro. Iso-Seq {}.", TEMPLATES[1].original);

        let first = apply_substitutions(&text, &subs);
        assert_eq!(first.applied, vec!["PacBio cosine similarity"]);
        assert_eq!(
            first.skipped,
            vec!["Figure 1 gene counts", "other cosine similarity range"]
        );
        assert!(first.text.starts_with("Intro. Iso-Seq consistently"));
        assert!(first.text.contains("ranging from 0.9951 to 0.9987"));

        let second = apply_substitutions(&first.text, &subs);
        assert_eq!(second.text, first.text);
        assert!(!second.changed());
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let sub = Substitution {
            label: "x",
            original: "old",
            replacement: "new".to_string(),
        };
        let report = apply_substitutions("old, old", &[sub]);
        assert_eq!(report.text, "new, new");
    }
}
