//! Balancing a reaction from text to integer coefficients.

use std::iter::zip;

use log::{debug, info};
use serde::Serialize;

use crate::config::BalanceConfig;
use crate::equation::{Equation, Molecule};
use crate::error::{BalanceFailure, ChembalError};
use crate::matrix::StoichiometricMatrix;
use crate::normalize::normalize;
use crate::solver::solve;

/// A balanced chemical equation (e.g. `2H2 + O2 -> 2H2O`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BalancedEquation {
    /// A vector of reactants
    reactants: Vec<Molecule>,
    /// A vector of products
    products: Vec<Molecule>,
    /// Stoichiometric coefficients of the reactants
    reactant_coefficients: Vec<i64>,
    /// Stoichiometric coefficients of the products
    product_coefficients: Vec<i64>,
    /// The equation with coefficients written in
    equation: String,
}

impl BalancedEquation {
    /// Returns the vector of reactants
    pub fn reactants(&self) -> &[Molecule] {
        &self.reactants
    }

    /// Returns the vector of products
    pub fn products(&self) -> &[Molecule] {
        &self.products
    }

    /// Returns the coefficients of the reactants, in reactant order
    /// # Example
    /// ```
    /// let balanced = chembal::balance("H2 + O2 -> H2O").unwrap();
    /// assert_eq!(balanced.reactant_coefficients(), &[2, 1]);
    /// ```
    pub fn reactant_coefficients(&self) -> &[i64] {
        &self.reactant_coefficients
    }

    /// Returns the coefficients of the products, in product order
    /// # Example
    /// ```
    /// let balanced = chembal::balance("H2 + O2 -> H2O").unwrap();
    /// assert_eq!(balanced.product_coefficients(), &[2]);
    /// ```
    pub fn product_coefficients(&self) -> &[i64] {
        &self.product_coefficients
    }

    /// Returns the balanced equation as a string
    /// # Example
    /// ```
    /// let balanced = chembal::balance("H2 + O2 -> H2O").unwrap();
    /// assert_eq!(balanced.equation(), "2H2 + O2 -> 2H2O");
    /// ```
    pub fn equation(&self) -> &str {
        &self.equation
    }
}

impl std::fmt::Display for BalancedEquation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.equation)
    }
}

/// Balances reactions with a fixed [`BalanceConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Balancer {
    config: BalanceConfig,
}

impl Balancer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BalanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Balances a reaction such as `Fe + O2 -> Fe2O3`.
    ///
    /// # Errors
    /// A [`BalanceFailure`] wrapping whichever step failed. No partial
    /// result is ever returned.
    pub fn balance(&self, equation: &str) -> Result<BalancedEquation, BalanceFailure> {
        self.try_balance(equation)
            .map_err(|cause| BalanceFailure::new(equation, cause))
    }

    fn try_balance(&self, input: &str) -> Result<BalancedEquation, ChembalError> {
        let equation = Equation::parse(input)?;
        let matrix = StoichiometricMatrix::build(equation.reactants(), equation.products());
        debug!(
            "balancing '{}': {} elements x {} molecules",
            input,
            matrix.nrows(),
            matrix.ncols()
        );

        let solution = solve(&matrix, self.config.pivot_tolerance)?;
        debug!("real solution: {solution:?}");
        let coefficients = normalize(&solution, &self.config)?;
        check_conservation(&matrix, &coefficients)?;

        let (reactant_coefficients, product_coefficients) = coefficients.split_at(matrix.reactant_count());
        let reactant_coefficients = reactant_coefficients.to_vec();
        let product_coefficients = product_coefficients.to_vec();

        let rendered = format!(
            "{} -> {}",
            render_side(equation.reactants(), &reactant_coefficients),
            render_side(equation.products(), &product_coefficients)
        );
        info!("balanced '{input}' as '{rendered}'");

        Ok(BalancedEquation {
            reactants: equation.reactants().to_vec(),
            products: equation.products().to_vec(),
            reactant_coefficients,
            product_coefficients,
            equation: rendered,
        })
    }
}

/// Balances a reaction with the default configuration.
///
/// # Example
/// ```
/// let balanced = chembal::balance("Fe + O2 -> Fe2O3").unwrap();
/// assert_eq!(balanced.equation(), "4Fe + 3O2 -> 2Fe2O3");
///
/// let failure = chembal::balance("A -> B").unwrap_err();
/// assert!(failure.is_no_solution());
/// ```
pub fn balance(equation: &str) -> Result<BalancedEquation, BalanceFailure> {
    Balancer::new().balance(equation)
}

/// Checks that the integer coefficients make every element row sum to zero
fn check_conservation(matrix: &StoichiometricMatrix, coefficients: &[i64]) -> Result<(), ChembalError> {
    for (element, row) in zip(matrix.elements(), matrix.rows()) {
        let total: i128 = zip(row, coefficients)
            .map(|(&count, &c)| count as i128 * i128::from(c))
            .sum();
        if total != 0 {
            return Err(ChembalError::no_solution(format!(
                "coefficients {coefficients:?} do not conserve {element}"
            )));
        }
    }
    Ok(())
}

fn render_side(molecules: &[Molecule], coefficients: &[i64]) -> String {
    zip(molecules, coefficients)
        .map(|(molecule, &quantity)| {
            if quantity == 1 {
                molecule.formula().to_string()
            } else {
                format!("{quantity}{}", molecule.formula())
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
