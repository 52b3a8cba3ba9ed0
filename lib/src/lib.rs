//! Balancing chemical equations and estimating molecule geometry.
//!
//! An equation such as `Fe + O2 -> Fe2O3` is parsed into molecules, turned
//! into an element-by-molecule matrix, solved by Gaussian elimination and
//! scaled to the smallest positive integer coefficients:
//!
//! ```
//! let balanced = chembal::balance("C3H8 + O2 -> CO2 + H2O").unwrap();
//! assert_eq!(balanced.to_string(), "C3H8 + 5O2 -> 3CO2 + 4H2O");
//! ```
//!
//! [`geometry`] places the atoms of a single molecule in 3D, and
//! [`solve_reaction`] combines both for a whole reaction.

pub mod balance;
pub mod config;
pub mod equation;
pub mod error;
pub mod formula;
pub mod geometry;
pub mod matrix;
pub mod normalize;
pub mod report;
pub mod solver;

pub use balance::{balance, BalancedEquation, Balancer};
pub use config::BalanceConfig;
pub use equation::{Equation, Molecule};
pub use error::{BalanceFailure, ChembalError};
pub use formula::ElementCount;
pub use geometry::{Atom, Bond, BondOrder, MoleculeGeometry};
pub use report::{solve_reaction, solve_reaction_with, MoleculeEntry, ReactionReport};
