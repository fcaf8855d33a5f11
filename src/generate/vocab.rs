use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Fixed, closed vocabularies driving the heuristics. These are configuration
/// data, never discovered from the document: heading phrases for structure
/// detection, anchor keywords for MCQ extraction, domain terms for cloze
/// flashcards. Order is priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default = "default_headings")]
    pub headings: Vec<String>,

    #[serde(default = "default_anchors")]
    pub anchors: Vec<String>,

    #[serde(default = "default_terms")]
    pub terms: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            headings: default_headings(),
            anchors: default_anchors(),
            terms: default_terms(),
        }
    }
}

impl Vocabulary {
    /// Loads a vocabulary from a YAML file. Missing sections fall back to
    /// the built-in lists.
    pub fn from_yaml_file(path: &str) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .context(format!("failed to read vocabulary file '{}'", path))?;
        serde_yaml_ng::from_str(&raw)
            .context(format!("vocabulary file '{}' is not valid YAML", path))
    }
}

fn default_headings() -> Vec<String> {
    [
        "Reflection",
        "Refraction",
        "Snell’s Law",
        "Total Internal Reflection",
        "Nature of light",
        "Interference",
        "Diffraction",
        "Polarization",
        "Photoelectric effect",
    ]
    .map(String::from)
    .to_vec()
}

fn default_anchors() -> Vec<String> {
    ["is", "are", "called", "defined as", "equals", "="]
        .map(String::from)
        .to_vec()
}

fn default_terms() -> Vec<String> {
    [
        "Reflection",
        "Refraction",
        "Diffraction",
        "Polarization",
        "Interference",
    ]
    .map(String::from)
    .to_vec()
}
