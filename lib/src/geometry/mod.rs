//! Approximate 3D structures of single molecules.
//!
//! A structure fetched from an outside provider is used when it is usable;
//! otherwise [`heuristic`] places the atoms around a central atom.

pub mod elements;
pub mod external;
pub mod heuristic;

use glam::DVec3;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use external::{ExternalBond, ExternalStructure, NoStructureSource, StaticStructureSource, StructureSource};

/// A placed atom with its display attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    /// Position in Å
    pub position: DVec3,
    /// Display color as `#RRGGBB`
    pub color: String,
    /// Display radius in Å
    pub radius: f64,
}

impl Atom {
    /// Creates an atom with the color and radius of its element
    pub fn new(element: &str, position: DVec3) -> Self {
        Self {
            element: element.to_string(),
            position,
            color: elements::color(element).to_string(),
            radius: elements::display_radius(element),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondOrder {
    Single,
    Double,
    Triple,
}

impl BondOrder {
    /// Maps a numeric bond order; anything other than 2 or 3 is single
    pub fn from_order(order: u8) -> Self {
        match order {
            2 => BondOrder::Double,
            3 => BondOrder::Triple,
            _ => BondOrder::Single,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

/// A bond between two atoms, referenced by index into [`MoleculeGeometry::atoms`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub from: usize,
    pub to: usize,
    pub order: BondOrder,
    /// Length in Å
    pub distance: f64,
}

/// Atoms and bonds of one molecule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoleculeGeometry {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl MoleculeGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Adds an atom and returns its index
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Bonds two existing atoms, the distance is taken from their positions.
    ///
    /// Returns `None` if either index is out of range.
    pub fn connect(&mut self, from: usize, to: usize, order: BondOrder) -> Option<&Bond> {
        let distance = self.atoms.get(from)?.position.distance(self.atoms.get(to)?.position);
        self.connect_with_distance(from, to, order, distance)
    }

    /// Bonds two existing atoms with an explicit length
    pub fn connect_with_distance(&mut self, from: usize, to: usize, order: BondOrder, distance: f64) -> Option<&Bond> {
        if from >= self.atoms.len() || to >= self.atoms.len() {
            return None;
        }
        self.bonds.push(Bond {
            from,
            to,
            order,
            distance,
        });
        self.bonds.last()
    }

    /// Number of atoms per element, in first-seen order
    pub fn composition(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for atom in &self.atoms {
            match counts.iter_mut().find(|(symbol, _)| *symbol == atom.element) {
                Some((_, count)) => *count += 1,
                None => counts.push((atom.element.clone(), 1)),
            }
        }
        counts
    }
}

/// Builds the geometry of a molecule.
///
/// A non-empty, well formed `external` structure is converted directly;
/// anything else falls back to [`heuristic::generate`].
///
/// # Example
/// ```
/// use chembal::geometry::generate;
///
/// let water = generate("H2O", None);
/// assert_eq!(water.atoms.len(), 3);
/// assert_eq!(water.bonds.len(), 2);
/// ```
pub fn generate(formula: &str, external: Option<&ExternalStructure>) -> MoleculeGeometry {
    if let Some(structure) = external.filter(|s| !s.is_empty()) {
        match structure.to_geometry() {
            Some(geometry) => {
                debug!("using external structure for {formula}");
                return geometry;
            }
            None => warn!("external structure for {formula} is malformed, using estimated geometry"),
        }
    }
    heuristic::generate(formula)
}

/// Asks `source` for a structure of `formula` and builds the geometry from it
pub fn generate_with(formula: &str, source: &dyn StructureSource) -> MoleculeGeometry {
    let structure = source.fetch(formula);
    generate(formula, structure.as_ref())
}
