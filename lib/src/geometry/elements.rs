//! Static element data used for display and bond placement.

/// Display and size data of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementProperties {
    /// Element symbol, e.g. `Cl`
    pub symbol: &'static str,
    /// Display color as `#RRGGBB`
    pub color: &'static str,
    /// Covalent radius in Å, also used as display radius
    pub radius: f64,
    /// Standard atomic weight
    pub mass: f64,
}

const fn element(symbol: &'static str, color: &'static str, radius: f64, mass: f64) -> ElementProperties {
    ElementProperties {
        symbol,
        color,
        radius,
        mass,
    }
}

/// Elements 1 to 20
pub static ELEMENT_PROPERTIES: [ElementProperties; 20] = [
    element("H", "#FFFFFF", 0.31, 1.008),
    element("He", "#D9FFFF", 0.28, 4.0026),
    element("Li", "#CC80FF", 1.28, 6.94),
    element("Be", "#C2FF00", 0.96, 9.0122),
    element("B", "#FFB5B5", 0.84, 10.81),
    element("C", "#909090", 0.76, 12.011),
    element("N", "#3050F8", 0.71, 14.007),
    element("O", "#FF0D0D", 0.66, 15.999),
    element("F", "#90E050", 0.57, 18.998),
    element("Ne", "#B3E3F5", 0.58, 20.180),
    element("Na", "#AB5CF2", 1.66, 22.990),
    element("Mg", "#8AFF00", 1.41, 24.305),
    element("Al", "#BFA6A6", 1.21, 26.982),
    element("Si", "#F0C8A0", 1.11, 28.085),
    element("P", "#FF8000", 1.07, 30.974),
    element("S", "#FFFF30", 1.05, 32.06),
    element("Cl", "#1FF01F", 1.02, 35.45),
    element("Ar", "#80D1E3", 1.06, 39.948),
    element("K", "#8F40D4", 2.03, 39.098),
    element("Ca", "#3DFF00", 1.76, 40.078),
];

/// Color of elements missing from [`ELEMENT_PROPERTIES`]
pub const FALLBACK_COLOR: &str = "#909090";
/// Display radius of elements missing from [`ELEMENT_PROPERTIES`]
pub const FALLBACK_RADIUS: f64 = 0.8;
/// Covalent radius assumed for unknown elements when estimating a bond length
pub const FALLBACK_COVALENT_RADIUS: f64 = 1.0;

/// Typical bond lengths in Å. Lookups ignore the order of the pair.
static BOND_LENGTHS: [(&str, &str, f64); 11] = [
    ("C", "C", 1.54),
    ("C", "H", 1.09),
    ("C", "O", 1.43),
    ("C", "N", 1.47),
    ("C", "S", 1.82),
    ("C", "Cl", 1.77),
    ("H", "H", 0.74),
    ("H", "O", 0.96),
    ("H", "N", 1.01),
    ("O", "O", 1.48),
    ("N", "N", 1.45),
];

/// Looks up the properties of an element by symbol
pub fn properties(symbol: &str) -> Option<&'static ElementProperties> {
    ELEMENT_PROPERTIES.iter().find(|p| p.symbol == symbol)
}

/// Display color, [`FALLBACK_COLOR`] for unknown elements
pub fn color(symbol: &str) -> &'static str {
    properties(symbol).map_or(FALLBACK_COLOR, |p| p.color)
}

/// Display radius, [`FALLBACK_RADIUS`] for unknown elements
pub fn display_radius(symbol: &str) -> f64 {
    properties(symbol).map_or(FALLBACK_RADIUS, |p| p.radius)
}

/// Bond length between two elements in Å.
///
/// Uses the table of common pairs in either order and falls back to the sum
/// of the covalent radii.
///
/// # Example
/// ```
/// use chembal::geometry::elements::bond_length;
///
/// assert_eq!(bond_length("H", "C"), 1.09);
/// assert_eq!(bond_length("Na", "Cl"), 1.66 + 1.02);
/// assert_eq!(bond_length("Xx", "Yy"), 2.0);
/// ```
pub fn bond_length(a: &str, b: &str) -> f64 {
    BOND_LENGTHS
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, length)| *length)
        .unwrap_or_else(|| covalent_radius(a) + covalent_radius(b))
}

fn covalent_radius(symbol: &str) -> f64 {
    properties(symbol).map_or(FALLBACK_COVALENT_RADIUS, |p| p.radius)
}

/// Symbol of the element with the given atomic number
pub fn symbol_for_atomic_number(atomic_number: u32) -> Option<String> {
    mendeleev::ALL_ELEMENTS
        .iter()
        .find(|e| u32::from(e.atomic_number()) == atomic_number)
        .map(|e| e.symbol().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_first_twenty_elements() {
        for (i, props) in ELEMENT_PROPERTIES.iter().enumerate() {
            assert_eq!(symbol_for_atomic_number(i as u32 + 1).as_deref(), Some(props.symbol));
        }
    }

    #[test]
    fn unknown_elements_use_fallbacks() {
        assert_eq!(color("Fe"), FALLBACK_COLOR);
        assert_eq!(display_radius("Fe"), FALLBACK_RADIUS);
        assert_eq!(color("O"), "#FF0D0D");
        assert_eq!(display_radius("O"), 0.66);
    }

    #[test]
    fn bond_length_is_symmetric() {
        assert_eq!(bond_length("Cl", "C"), bond_length("C", "Cl"));
        assert_eq!(bond_length("O", "H"), 0.96);
        assert_eq!(bond_length("N", "H"), 1.01);
        assert_eq!(bond_length("O", "Na"), bond_length("Na", "O"));
        assert_eq!(bond_length("Fe", "O"), 1.0 + 0.66);
    }

    #[test]
    fn bond_table_has_one_row_per_pair() {
        for (i, (a, b, _)) in BOND_LENGTHS.iter().enumerate() {
            for (c, d, _) in &BOND_LENGTHS[i + 1..] {
                assert!(!((a == c && b == d) || (a == d && b == c)), "{a}-{b} listed twice");
            }
        }
    }

    #[test]
    fn atomic_numbers_beyond_table_resolve() {
        assert_eq!(symbol_for_atomic_number(26).as_deref(), Some("Fe"));
        assert_eq!(symbol_for_atomic_number(0), None);
        assert_eq!(symbol_for_atomic_number(500), None);
    }
}
