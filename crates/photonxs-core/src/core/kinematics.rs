//! Compton scattering relations in terms of the wavelength ratio `λ = m_e c² / E`.
//!
//! Energies and the rest mass share the same unit (keV throughout the library).

#[inline]
pub fn wavelength_ratio(rest_mass: f64, energy: f64) -> f64 {
    rest_mass / energy
}

/// Lowest photon energy reachable by a single scattering (backscatter at 180°).
#[inline]
pub fn compton_edge(rest_mass: f64, incident_energy: f64) -> f64 {
    let lambda = wavelength_ratio(rest_mass, incident_energy);
    incident_energy / (1.0 + 2.0 / lambda)
}

/// Cosine of the scattering angle implied by the wavelength shift `λ_out - λ_in`.
///
/// Evaluated as `(1 + λ_in) - λ_out`; angle matching in the transfer integration
/// compares this value bit for bit, so the order of operations is fixed.
#[inline]
pub fn scattering_cosine(lambda_in: f64, lambda_out: f64) -> f64 {
    1.0 + lambda_in - lambda_out
}

#[inline]
pub fn klein_nishina_kernel(incident_energy: f64, scattered_energy: f64, cosine: f64) -> f64 {
    incident_energy / scattered_energy + scattered_energy / incident_energy - 1.0
        + cosine.powi(2)
}

#[inline]
pub fn scattered_photon_energy(rest_mass: f64, incident_energy: f64, cosine: f64) -> f64 {
    incident_energy / (1.0 + incident_energy / rest_mass * (1.0 - cosine))
}
