use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chembal::geometry::{ExternalStructure, StaticStructureSource, StructureSource};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StructureFile {
    Single(ExternalStructure),
    ByFormula(BTreeMap<String, ExternalStructure>),
}

/// Structures read from a JSON file.
///
/// The file holds either one structure, served for every formula, or an
/// object of structures keyed by formula.
#[derive(Debug, Default)]
pub struct JsonFileSource {
    any: Option<ExternalStructure>,
    by_formula: StaticStructureSource,
}

impl JsonFileSource {
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read structure file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid structure file {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let source = match serde_json::from_str(text)? {
            StructureFile::Single(structure) => Self {
                any: Some(structure),
                by_formula: StaticStructureSource::new(),
            },
            StructureFile::ByFormula(structures) => {
                let mut by_formula = StaticStructureSource::new();
                for (formula, structure) in structures {
                    by_formula.insert(&formula, structure);
                }
                Self {
                    any: None,
                    by_formula,
                }
            }
        };
        Ok(source)
    }
}

impl StructureSource for JsonFileSource {
    fn fetch(&self, formula: &str) -> Option<ExternalStructure> {
        self.by_formula.fetch(formula).or_else(|| self.any.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHANE: &str = r#"{
        "atomic_numbers": [6, 1],
        "x": [0.0, 0.63],
        "y": [0.0, 0.63],
        "z": [0.0, 0.63],
        "bonds": [{"from": 0, "to": 1}]
    }"#;

    #[test]
    fn single_structure_serves_every_formula() {
        let source = JsonFileSource::from_json_str(METHANE).unwrap();
        assert_eq!(source.fetch("CH4").unwrap().atomic_numbers, vec![6, 1]);
        assert!(source.fetch("H2O").is_some());
    }

    #[test]
    fn keyed_structures_match_formula() {
        let text = format!(r#"{{"CH4": {METHANE}}}"#);
        let source = JsonFileSource::from_json_str(&text).unwrap();
        assert!(source.fetch("CH4").is_some());
        assert!(source.fetch("H2O").is_none());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(JsonFileSource::from_json_str("[1, 2").is_err());
    }
}
