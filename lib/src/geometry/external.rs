//! Structures supplied by an outside provider.

use glam::DVec3;
use log::debug;
use serde::{Deserialize, Serialize};

use super::elements::symbol_for_atomic_number;
use super::{Atom, BondOrder, MoleculeGeometry};

/// 3D record as returned by a structure database: parallel coordinate
/// arrays plus a bond list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalStructure {
    pub atomic_numbers: Vec<u32>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    #[serde(default)]
    pub bonds: Vec<ExternalBond>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExternalBond {
    pub from: usize,
    pub to: usize,
    #[serde(default = "single")]
    pub order: u8,
    #[serde(default)]
    pub distance: Option<f64>,
}

fn single() -> u8 {
    1
}

impl ExternalStructure {
    pub fn is_empty(&self) -> bool {
        self.atomic_numbers.is_empty()
    }

    /// Converts the record into a geometry.
    ///
    /// Atomic numbers without a known element become `Unknown`. Bonds
    /// without a usable length get the distance between their atoms.
    /// Returns `None` if the coordinate arrays differ in length, hold a
    /// NaN or infinite value, or a bond references a missing atom.
    pub fn to_geometry(&self) -> Option<MoleculeGeometry> {
        let n = self.atomic_numbers.len();
        if self.x.len() != n || self.y.len() != n || self.z.len() != n {
            debug!("coordinate arrays do not match {n} atoms");
            return None;
        }
        if !self.x.iter().chain(&self.y).chain(&self.z).all(|v| v.is_finite()) {
            debug!("coordinates contain non-finite values");
            return None;
        }

        let mut geometry = MoleculeGeometry::new();
        for (i, &number) in self.atomic_numbers.iter().enumerate() {
            let symbol = symbol_for_atomic_number(number).unwrap_or_else(|| "Unknown".to_string());
            let position = DVec3::new(self.x[i], self.y[i], self.z[i]);
            geometry.add_atom(Atom::new(&symbol, position));
        }

        for bond in &self.bonds {
            let order = BondOrder::from_order(bond.order);
            let added = match bond.distance.filter(|d| d.is_finite() && *d > 0.0) {
                Some(distance) => geometry.connect_with_distance(bond.from, bond.to, order, distance),
                None => geometry.connect(bond.from, bond.to, order),
            };
            if added.is_none() {
                debug!("bond {}-{} references a missing atom", bond.from, bond.to);
                return None;
            }
        }
        Some(geometry)
    }
}

/// Provider of externally computed structures
pub trait StructureSource: Send + Sync {
    /// Structure for a formula, `None` when the provider has nothing usable
    fn fetch(&self, formula: &str) -> Option<ExternalStructure>;
}

/// Source that never has a structure, so only estimated geometries are produced
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStructureSource;

impl StructureSource for NoStructureSource {
    fn fetch(&self, _formula: &str) -> Option<ExternalStructure> {
        None
    }
}

/// Source backed by a fixed list of structures keyed by formula
#[derive(Debug, Clone, Default)]
pub struct StaticStructureSource {
    structures: Vec<(String, ExternalStructure)>,
}

impl StaticStructureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, formula: &str, structure: ExternalStructure) -> Self {
        self.insert(formula, structure);
        self
    }

    /// Adds or replaces the structure for `formula`
    pub fn insert(&mut self, formula: &str, structure: ExternalStructure) {
        let formula = formula.trim();
        match self.structures.iter_mut().find(|(f, _)| f == formula) {
            Some((_, existing)) => *existing = structure,
            None => self.structures.push((formula.to_string(), structure)),
        }
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}

impl StructureSource for StaticStructureSource {
    fn fetch(&self, formula: &str) -> Option<ExternalStructure> {
        let formula = formula.trim();
        self.structures.iter().find(|(f, _)| f == formula).map(|(_, s)| s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_bonds() {
        let structure: ExternalStructure =
            serde_json::from_str(r#"{"atomic_numbers":[1,1],"x":[0,0],"y":[0,0],"z":[0,0.74]}"#).unwrap();
        let geometry = structure.to_geometry().unwrap();
        assert_eq!(geometry.atoms.len(), 2);
        assert!(geometry.bonds.is_empty());
    }

    #[test]
    fn bond_order_defaults_to_single() {
        let bond: ExternalBond = serde_json::from_str(r#"{"from":0,"to":1}"#).unwrap();
        assert_eq!(bond.order, 1);
        assert_eq!(bond.distance, None);
    }

    #[test]
    fn static_source_replaces_entries() {
        let mut source = StaticStructureSource::new().with("H2", ExternalStructure::default());
        let hydrogen = ExternalStructure {
            atomic_numbers: vec![1, 1],
            x: vec![0.0, 0.0],
            y: vec![0.0, 0.0],
            z: vec![0.0, 0.74],
            bonds: Vec::new(),
        };
        source.insert(" H2 ", hydrogen.clone());
        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch("H2"), Some(hydrogen));
        assert_eq!(source.fetch("O2"), None);
    }

    #[test]
    fn unknown_atomic_number() {
        let structure = ExternalStructure {
            atomic_numbers: vec![999],
            x: vec![0.0],
            y: vec![0.0],
            z: vec![0.0],
            bonds: Vec::new(),
        };
        let geometry = structure.to_geometry().unwrap();
        assert_eq!(geometry.atoms[0].element, "Unknown");
        assert_eq!(geometry.atoms[0].radius, super::super::elements::FALLBACK_RADIUS);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let structure = ExternalStructure {
                atomic_numbers: vec![1, 1],
                x: vec![0.0, bad],
                y: vec![0.0, 0.0],
                z: vec![0.0, 0.74],
                bonds: vec![ExternalBond {
                    from: 0,
                    to: 1,
                    order: 1,
                    distance: None,
                }],
            };
            assert_eq!(structure.to_geometry(), None);
        }
    }

    #[test]
    fn invalid_distance_is_recomputed() {
        let structure = ExternalStructure {
            atomic_numbers: vec![6, 8],
            x: vec![0.0, 0.0],
            y: vec![0.0, 0.0],
            z: vec![0.0, 1.2],
            bonds: vec![ExternalBond {
                from: 0,
                to: 1,
                order: 2,
                distance: Some(-1.0),
            }],
        };
        let geometry = structure.to_geometry().unwrap();
        assert_eq!(geometry.bonds[0].distance, 1.2);
        assert_eq!(geometry.bonds[0].order, BondOrder::Double);
    }
}
