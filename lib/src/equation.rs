//! Reaction text: splitting into sides and parsing every molecule.

use serde::Serialize;

use crate::error::ChembalError;
use crate::formula::{self, ElementCount};

/// Arrow tokens that separate reactants from products
pub const ARROWS: [&str; 2] = ["->", "→"];

/// A molecule of a reaction (e.g. `Fe2(SO4)3`)
///
/// Two molecules are equal when their formula text is equal, even if the
/// texts describe the same compound.
#[derive(Clone, Debug, Serialize)]
pub struct Molecule {
    /// Formula as written in the equation, without surrounding whitespace
    formula: String,
    /// Element counts parsed from the formula
    elements: ElementCount,
}

impl Molecule {
    /// Parses a molecule from its formula text
    /// # Errors
    /// Propagates [`ChembalError::MalformedFormula`] from the formula parser
    pub fn parse(formula: &str) -> Result<Self, ChembalError> {
        let formula = formula.trim();
        Ok(Self {
            formula: formula.to_string(),
            elements: formula::parse(formula)?,
        })
    }

    /// Returns the formula text
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Returns the element counts of the molecule
    pub fn elements(&self) -> &ElementCount {
        &self.elements
    }
}

impl PartialEq for Molecule {
    fn eq(&self, other: &Self) -> bool {
        self.formula == other.formula
    }
}

impl Eq for Molecule {}

/// Splits a reaction into reactant and product formula texts.
///
/// The reaction must contain exactly one arrow (see [`ARROWS`]). Each side
/// is split on `+`, pieces are trimmed and empty pieces dropped.
///
/// # Errors
/// [`ChembalError::InvalidEquation`] if there is no arrow, more than one
/// arrow, or a side without molecules.
///
/// # Example
/// ```
/// use chembal::equation::split;
///
/// let (reactants, products) = split("H2 + O2 -> H2O").unwrap();
/// assert_eq!(reactants, vec!["H2", "O2"]);
/// assert_eq!(products, vec!["H2O"]);
/// ```
pub fn split(equation: &str) -> Result<(Vec<String>, Vec<String>), ChembalError> {
    let arrow_count: usize = ARROWS.iter().map(|arrow| equation.matches(*arrow).count()).sum();
    if arrow_count != 1 {
        return Err(ChembalError::invalid_equation(format!(
            "expected exactly one arrow, found {arrow_count}"
        )));
    }

    let (reactants_str, products_str) = ARROWS
        .iter()
        .find_map(|arrow| equation.split_once(*arrow))
        .ok_or_else(|| ChembalError::invalid_equation("missing arrow"))?;

    let reactants = split_side(reactants_str, "reactants")?;
    let products = split_side(products_str, "products")?;
    Ok((reactants, products))
}

fn split_side(side: &str, name: &str) -> Result<Vec<String>, ChembalError> {
    let molecules: Vec<String> = side
        .split('+')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect();

    if molecules.is_empty() {
        return Err(ChembalError::invalid_equation(format!("no {name} given")));
    }
    Ok(molecules)
}

/// A chemical equation before balancing (e.g. `H2 + O2 -> H2O`)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Equation {
    /// String from which the equation was parsed
    original_str: String,
    /// A vector of reactants
    reactants: Vec<Molecule>,
    /// A vector of products
    products: Vec<Molecule>,
}

impl Equation {
    /// Splits the equation and parses every molecule
    /// # Errors
    /// [`ChembalError::InvalidEquation`] from splitting,
    /// [`ChembalError::MalformedFormula`] from parsing
    /// # Example
    /// ```
    /// use chembal::equation::Equation;
    ///
    /// let equation = Equation::parse("Fe + O2 -> Fe2O3").unwrap();
    /// assert_eq!(equation.reactants().len(), 2);
    /// assert_eq!(equation.products()[0].elements().get("Fe"), 2);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ChembalError> {
        let (reactants_str, products_str) = split(input)?;

        let reactants = reactants_str
            .iter()
            .map(|m| Molecule::parse(m))
            .collect::<Result<Vec<_>, _>>()?;
        let products = products_str
            .iter()
            .map(|m| Molecule::parse(m))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            original_str: input.to_string(),
            reactants,
            products,
        })
    }

    /// Returns the original string from which the equation was parsed
    pub fn original_str(&self) -> &str {
        &self.original_str
    }

    /// Returns the vector of reactants
    pub fn reactants(&self) -> &[Molecule] {
        &self.reactants
    }

    /// Returns the vector of products
    pub fn products(&self) -> &[Molecule] {
        &self.products
    }

    /// Iterates over reactants followed by products
    pub fn molecules(&self) -> impl Iterator<Item = &Molecule> {
        self.reactants.iter().chain(self.products.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sides_in_order() {
        let (reactants, products) = split("Na2CO3 + HCl -> NaCl + H2O + CO2").unwrap();
        assert_eq!(reactants, vec!["Na2CO3", "HCl"]);
        assert_eq!(products, vec!["NaCl", "H2O", "CO2"]);
    }

    #[test]
    fn unicode_arrow() {
        let (reactants, products) = split("H2 + O2 → H2O").unwrap();
        assert_eq!(reactants, vec!["H2", "O2"]);
        assert_eq!(products, vec!["H2O"]);
    }

    #[test]
    fn two_arrows_are_rejected() {
        assert!(matches!(split("A -> B -> C"), Err(ChembalError::InvalidEquation(_))));
        assert!(matches!(split("A -> B → C"), Err(ChembalError::InvalidEquation(_))));
    }

    #[test]
    fn missing_arrow_is_rejected() {
        assert!(matches!(split("A B"), Err(ChembalError::InvalidEquation(_))));
        assert!(matches!(split("H2 + O2 = H2O"), Err(ChembalError::InvalidEquation(_))));
    }

    #[test]
    fn empty_side_is_rejected() {
        assert!(matches!(split(" -> H2O"), Err(ChembalError::InvalidEquation(_))));
        assert!(matches!(split("H2 + O2 -> + "), Err(ChembalError::InvalidEquation(_))));
    }

    #[test]
    fn empty_pieces_are_dropped() {
        let (reactants, _) = split("H2 + + O2 -> H2O").unwrap();
        assert_eq!(reactants, vec!["H2", "O2"]);
    }

    #[test]
    fn molecules_compare_by_formula_text() {
        let a = Molecule::parse(" CH3OH ").unwrap();
        let b = Molecule::parse("CH3OH").unwrap();
        let c = Molecule::parse("CH4O").unwrap();
        assert_eq!(a, b);
        assert_ne!(b, c);
        assert_eq!(b.elements().atom_count(), c.elements().atom_count());
    }

    #[test]
    fn parse_reports_malformed_molecule() {
        assert!(matches!(
            Equation::parse("Ca(OH2 -> CaO + H2O"),
            Err(ChembalError::MalformedFormula { .. })
        ));
    }

    #[test]
    fn molecules_iterate_reactants_first() {
        let equation = Equation::parse("H2 + O2 -> H2O").unwrap();
        let formulas: Vec<&str> = equation.molecules().map(Molecule::formula).collect();
        assert_eq!(formulas, vec!["H2", "O2", "H2O"]);
        assert_eq!(equation.original_str(), "H2 + O2 -> H2O");
    }
}
