//! Balanced reaction together with the geometry of each species.

use log::info;
use serde::Serialize;

use crate::balance::{BalancedEquation, Balancer};
use crate::error::BalanceFailure;
use crate::geometry::{generate_with, MoleculeGeometry, StructureSource};

/// Geometry of one distinct formula of a reaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoleculeEntry {
    pub formula: String,
    pub geometry: MoleculeGeometry,
}

/// Everything known about a solved reaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionReport {
    /// The text as entered
    pub input: String,
    /// Balanced equation with coefficients written in
    pub balanced: String,
    pub reactant_coefficients: Vec<i64>,
    pub product_coefficients: Vec<i64>,
    /// Formulas of all species, reactants first
    pub molecules: Vec<String>,
    /// One entry per distinct formula, in order of first appearance
    pub geometries: Vec<MoleculeEntry>,
}

impl ReactionReport {
    /// Geometry of a formula that appears in the reaction
    pub fn geometry(&self, formula: &str) -> Option<&MoleculeGeometry> {
        self.geometries
            .iter()
            .find(|entry| entry.formula == formula)
            .map(|entry| &entry.geometry)
    }

    fn from_balanced(input: &str, balanced: &BalancedEquation, source: &dyn StructureSource) -> Self {
        let molecules: Vec<String> = balanced
            .reactants()
            .iter()
            .chain(balanced.products())
            .map(|m| m.formula().to_string())
            .collect();

        let mut geometries: Vec<MoleculeEntry> = Vec::new();
        for formula in &molecules {
            if geometries.iter().any(|entry| entry.formula == *formula) {
                continue;
            }
            geometries.push(MoleculeEntry {
                formula: formula.clone(),
                geometry: generate_with(formula, source),
            });
        }

        Self {
            input: input.to_string(),
            balanced: balanced.equation().to_string(),
            reactant_coefficients: balanced.reactant_coefficients().to_vec(),
            product_coefficients: balanced.product_coefficients().to_vec(),
            molecules,
            geometries,
        }
    }
}

/// Balances `text` with `balancer` and builds a geometry for every species.
///
/// # Errors
/// The [`BalanceFailure`] of the balancing step; geometry never fails.
pub fn solve_reaction_with(
    balancer: &Balancer,
    text: &str,
    source: &dyn StructureSource,
) -> Result<ReactionReport, BalanceFailure> {
    let balanced = balancer.balance(text)?;
    let report = ReactionReport::from_balanced(text, &balanced, source);
    info!("solved {} with {} distinct species", report.balanced, report.geometries.len());
    Ok(report)
}

/// Balances `text` with the default settings and builds a geometry for every species.
///
/// # Example
/// ```
/// use chembal::geometry::NoStructureSource;
/// use chembal::solve_reaction;
///
/// let report = solve_reaction("H2 + O2 -> H2O", &NoStructureSource).unwrap();
/// assert_eq!(report.balanced, "2H2 + O2 -> 2H2O");
/// assert_eq!(report.geometries.len(), 3);
/// ```
pub fn solve_reaction(text: &str, source: &dyn StructureSource) -> Result<ReactionReport, BalanceFailure> {
    solve_reaction_with(&Balancer::new(), text, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{heuristic, ExternalStructure, NoStructureSource, StaticStructureSource};

    #[test]
    fn report_lists_species_in_order() {
        let report = solve_reaction("CH4 + O2 -> CO2 + H2O", &NoStructureSource).unwrap();
        assert_eq!(report.input, "CH4 + O2 -> CO2 + H2O");
        assert_eq!(report.balanced, "CH4 + 2O2 -> CO2 + 2H2O");
        assert_eq!(report.reactant_coefficients, vec![1, 2]);
        assert_eq!(report.product_coefficients, vec![1, 2]);
        assert_eq!(report.molecules, vec!["CH4", "O2", "CO2", "H2O"]);
        let formulas: Vec<&str> = report.geometries.iter().map(|e| e.formula.as_str()).collect();
        assert_eq!(formulas, vec!["CH4", "O2", "CO2", "H2O"]);
        assert_eq!(report.geometry("CH4"), Some(&heuristic::generate("CH4")));
    }

    #[test]
    fn repeated_formula_has_one_geometry() {
        let report = solve_reaction("H2O -> H2O", &NoStructureSource).unwrap();
        assert_eq!(report.molecules.len(), 2);
        assert_eq!(report.geometries.len(), 1);
    }

    #[test]
    fn external_structures_are_used() {
        let oxygen = ExternalStructure {
            atomic_numbers: vec![8, 8],
            x: vec![0.0, 0.0],
            y: vec![0.0, 0.0],
            z: vec![0.0, 1.21],
            bonds: Vec::new(),
        };
        let source = StaticStructureSource::new().with("O2", oxygen);
        let report = solve_reaction("H2 + O2 -> H2O", &source).unwrap();
        let geometry = report.geometry("O2").unwrap();
        assert_eq!(geometry.atoms[1].position.z, 1.21);
        assert!(geometry.bonds.is_empty());
    }

    #[test]
    fn failure_is_reported() {
        let failure = solve_reaction("H2 + O2", &NoStructureSource).unwrap_err();
        assert!(failure.is_invalid_equation());
        assert_eq!(failure.equation(), "H2 + O2");
    }

    #[test]
    fn report_serializes() {
        let report = solve_reaction("H2 + O2 -> H2O", &NoStructureSource).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["balanced"], "2H2 + O2 -> 2H2O");
        assert_eq!(json["geometries"][1]["geometry"]["bonds"][0]["order"], "double");
    }
}
