//! Deterministic placement of atoms when no measured structure is available.
//!
//! A few small molecules have fixed geometries. Everything else becomes a
//! star: the first non-hydrogen element sits at the origin and every other
//! atom is placed on a spiral around it, bonded to the center.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_6, PI};

use glam::DVec3;
use log::warn;

use super::elements::bond_length;
use super::{Atom, BondOrder, MoleculeGeometry};
use crate::formula;

/// H-O-H angle of water in degrees
pub const WATER_ANGLE: f64 = 104.5;
/// Atoms past this many are left out of an estimated geometry
pub const MAX_ATOMS: u64 = 10_000;

/// Positions per ring of the spiral
const RING_SIZE: u32 = 8;

/// Estimates the geometry of `formula`.
///
/// An unparsable or element-free formula gives an empty geometry.
///
/// # Example
/// ```
/// use chembal::geometry::heuristic::generate;
///
/// let methane = generate("CH4");
/// assert_eq!(methane.atoms[0].element, "C");
/// assert_eq!(methane.bonds.len(), 4);
/// assert!(methane.bonds.iter().all(|b| b.from == 0));
/// ```
pub fn generate(formula: &str) -> MoleculeGeometry {
    match formula.trim() {
        "H2" => diatomic("H", 0.74, BondOrder::Single),
        "O2" => diatomic("O", 1.48, BondOrder::Double),
        "H2O" => water(),
        other => star(other),
    }
}

fn diatomic(element: &str, length: f64, order: BondOrder) -> MoleculeGeometry {
    let mut geometry = MoleculeGeometry::new();
    let a = geometry.add_atom(Atom::new(element, DVec3::ZERO));
    let b = geometry.add_atom(Atom::new(element, DVec3::new(0.0, 0.0, length)));
    geometry.connect(a, b, order);
    geometry
}

fn water() -> MoleculeGeometry {
    let half_angle = (WATER_ANGLE / 2.0).to_radians();
    let length = bond_length("O", "H");
    // hydrogens mirror each other across the z axis
    let (x, z) = (length * half_angle.sin(), length * half_angle.cos());

    let mut geometry = MoleculeGeometry::new();
    let oxygen = geometry.add_atom(Atom::new("O", DVec3::ZERO));
    for position in [DVec3::new(x, 0.0, z), DVec3::new(-x, 0.0, z)] {
        let hydrogen = geometry.add_atom(Atom::new("H", position));
        geometry.connect(oxygen, hydrogen, BondOrder::Single);
    }
    geometry
}

fn star(formula: &str) -> MoleculeGeometry {
    let counts = match formula::parse(formula) {
        Ok(counts) => counts,
        Err(err) => {
            warn!("no geometry for {formula}: {err}");
            return MoleculeGeometry::new();
        }
    };
    let Some(center) = counts
        .symbols()
        .find(|s| *s != "H")
        .or_else(|| counts.symbols().next())
        .map(str::to_string)
    else {
        return MoleculeGeometry::new();
    };

    let mut geometry = MoleculeGeometry::new();
    let center_index = geometry.add_atom(Atom::new(&center, DVec3::ZERO));
    let mut placed = 1u64;

    let mut angle = 0u32;
    let mut level = 0u32;
    for (symbol, count) in counts.iter() {
        let remaining = if symbol == center { count - 1 } else { count };
        let radius = bond_length(&center, symbol);
        for _ in 0..remaining {
            if placed >= MAX_ATOMS {
                warn!("{formula} has more than {MAX_ATOMS} atoms, the rest are not placed");
                return geometry;
            }
            let index = geometry.add_atom(Atom::new(symbol, spiral_position(angle, level, radius)));
            geometry.connect(center_index, index, BondOrder::Single);
            placed += 1;

            angle = (angle + 1) % RING_SIZE;
            if angle == 0 {
                level += 1;
            }
        }
    }
    geometry
}

/// Point at `radius` from the origin; `angle` steps around in eighths of a
/// turn, `level` tilts away from the z axis in steps of 30°.
fn spiral_position(angle: u32, level: u32, radius: f64) -> DVec3 {
    let phi = f64::from(angle) * FRAC_PI_4;
    let theta = f64::from(level) * FRAC_PI_6 + PI / 12.0;
    DVec3::new(
        radius * theta.sin() * phi.cos(),
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
    )
}
