//! Element-conservation matrix of a reaction.

use crate::equation::Molecule;

/// One row per element, one column per molecule (reactants, then products).
///
/// A cell holds the number of atoms of the row's element in the column's
/// molecule, negated for products, so a coefficient vector that balances the
/// reaction makes every row sum to zero.
#[derive(Clone, Debug, PartialEq)]
pub struct StoichiometricMatrix {
    elements: Vec<String>,
    reactant_count: usize,
    columns: usize,
    rows: Vec<Vec<f64>>,
}

impl StoichiometricMatrix {
    /// Builds the matrix of a reaction.
    ///
    /// Rows follow the order in which elements are first seen when scanning
    /// reactants and then products. An element missing from a molecule
    /// contributes 0.
    ///
    /// # Example
    /// ```
    /// use chembal::equation::Equation;
    /// use chembal::matrix::StoichiometricMatrix;
    ///
    /// let equation = Equation::parse("H2 + O2 -> H2O").unwrap();
    /// let matrix = StoichiometricMatrix::build(equation.reactants(), equation.products());
    ///
    /// assert_eq!(matrix.elements(), &["H".to_string(), "O".to_string()]);
    /// assert_eq!(matrix.rows(), &[vec![2.0, 0.0, -2.0], vec![0.0, 2.0, -1.0]]);
    /// ```
    pub fn build(reactants: &[Molecule], products: &[Molecule]) -> Self {
        // get all the elements used in the equation (each element corresponds to one row)
        let mut elements: Vec<String> = Vec::new();
        for molecule in reactants.iter().chain(products.iter()) {
            for symbol in molecule.elements().symbols() {
                if !elements.iter().any(|e| e == symbol) {
                    elements.push(symbol.to_string());
                }
            }
        }

        let rows = elements
            .iter()
            .map(|element| {
                let reactant_cells = reactants
                    .iter()
                    .map(|m| f64::from(m.elements().get(element)));
                let product_cells = products
                    .iter()
                    .map(|m| -f64::from(m.elements().get(element)));
                reactant_cells.chain(product_cells).collect()
            })
            .collect();

        Self {
            elements,
            reactant_count: reactants.len(),
            columns: reactants.len() + products.len(),
            rows,
        }
    }

    /// Element symbol of every row
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Matrix cells, row by row
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of reactant columns; product columns follow them
    pub fn reactant_count(&self) -> usize {
        self.reactant_count
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::Equation;

    fn matrix_of(equation: &str) -> StoichiometricMatrix {
        let equation = Equation::parse(equation).unwrap();
        StoichiometricMatrix::build(equation.reactants(), equation.products())
    }

    #[test]
    fn products_are_negated() {
        let matrix = matrix_of("Fe + O2 -> Fe2O3");
        assert_eq!(matrix.elements(), &["Fe".to_string(), "O".to_string()]);
        assert_eq!(matrix.rows(), &[vec![1.0, 0.0, -2.0], vec![0.0, 2.0, -3.0]]);
        assert_eq!(matrix.reactant_count(), 2);
        assert_eq!((matrix.nrows(), matrix.ncols()), (2, 3));
    }

    #[test]
    fn elements_first_seen_in_products_come_last() {
        let matrix = matrix_of("NaOH -> Na2O + H2O + Xe");
        assert_eq!(
            matrix.elements(),
            &["Na".to_string(), "O".to_string(), "H".to_string(), "Xe".to_string()]
        );
        assert_eq!(matrix.rows()[3], vec![0.0, 0.0, 0.0, -1.0]);
    }

    #[test]
    fn group_counts_reach_the_matrix() {
        let matrix = matrix_of("Al2(SO4)3 + Ca(OH)2 -> Al(OH)3 + CaSO4");
        let oxygen = matrix.elements().iter().position(|e| e == "O").unwrap();
        assert_eq!(matrix.rows()[oxygen], vec![12.0, 2.0, -3.0, -4.0]);
    }

    #[test]
    fn formulas_without_elements_give_no_rows() {
        let matrix = matrix_of("12 -> 34");
        assert_eq!(matrix.nrows(), 0);
        assert_eq!(matrix.ncols(), 2);
    }
}
