use serde::Deserialize;

pub const ELECTRON_CLASSICAL_RADIUS_SQUARED_BARN: f64 = 0.07939827;
pub const ELECTRON_REST_MASS_KEV: f64 = 511.006;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicalConstants {
    pub electron_classical_radius_squared_barn: f64,
    pub electron_rest_mass_kev: f64,
}

impl PhysicalConstants {
    /// Both constants scale every transfer element, so each must be finite and positive.
    pub fn is_physical(&self) -> bool {
        [
            self.electron_classical_radius_squared_barn,
            self.electron_rest_mass_kev,
        ]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            electron_classical_radius_squared_barn: ELECTRON_CLASSICAL_RADIUS_SQUARED_BARN,
            electron_rest_mass_kev: ELECTRON_REST_MASS_KEV,
        }
    }
}
