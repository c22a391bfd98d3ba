use super::cross_sections::CrossSectionError;
use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementProperties {
    pub symbol: &'static str,
    pub atomic_number: u32,
    /// Atomic mass in g/mol.
    pub atomic_mass: f64,
    /// Multiplier turning a mass coefficient in cm²/g into a cross section in barn/atom.
    pub barn_per_atom_factor: f64,
}

impl ElementProperties {
    #[inline]
    pub fn z_over_a(&self) -> f64 {
        self.atomic_number as f64 / self.atomic_mass
    }
}

#[rustfmt::skip]
static ELEMENTS: Map<&'static str, ElementProperties> = phf_map! {
    "H"  => ElementProperties { symbol: "H",  atomic_number: 1,  atomic_mass: 1.00794,  barn_per_atom_factor: 1.67 },
    "O"  => ElementProperties { symbol: "O",  atomic_number: 8,  atomic_mass: 15.9994,  barn_per_atom_factor: 26.57 },
    "Al" => ElementProperties { symbol: "Al", atomic_number: 13, atomic_mass: 26.98154, barn_per_atom_factor: 44.80 },
};

pub fn element_properties(
    symbol: &str,
) -> Result<&'static ElementProperties, CrossSectionError> {
    ELEMENTS
        .get(symbol.trim())
        .ok_or_else(|| CrossSectionError::UnknownElement(symbol.to_string()))
}

pub fn supported_elements() -> impl Iterator<Item = &'static str> {
    ELEMENTS.keys().copied()
}
