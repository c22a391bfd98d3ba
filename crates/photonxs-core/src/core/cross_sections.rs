//! Mass interaction coefficients for a single element at a single photon energy.
//!
//! Every function validates its input in the same order: the element symbol, then
//! the energy sign, then the element's fitted energy domain. Results are in cm²/g
//! unless stated otherwise.

use super::coefficients::{energy_domain, fit_segment};
use super::elements::{ElementProperties, element_properties};
use thiserror::Error;

/// Reduced-energy scale of the scattering fits, in keV.
const SCATTERING_REFERENCE_ENERGY_KEV: f64 = 511.04;
/// Thomson cross section per mole of electrons, in cm²/mol.
const THOMSON_MOLAR_CROSS_SECTION: f64 = 0.40061;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CrossSectionError {
    #[error("Unknown element symbol '{0}'")]
    UnknownElement(String),
    #[error("Invalid photon energy {0} keV: energy must be finite and positive")]
    InvalidEnergy(f64),
    #[error(
        "Energy {energy} keV is outside the fitted domain [{min}, {max}] keV of element '{symbol}'"
    )]
    EnergyOutOfDomain {
        symbol: String,
        energy: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossSectionKind {
    Photoelectric,
    Incoherent,
    KleinNishina,
    Total,
}

fn validated_energy(
    symbol: &str,
    energy_kev: f64,
) -> Result<&'static ElementProperties, CrossSectionError> {
    let element = element_properties(symbol)?;
    if !energy_kev.is_finite() || energy_kev <= 0.0 {
        return Err(CrossSectionError::InvalidEnergy(energy_kev));
    }
    Ok(element)
}

fn validated_element(
    symbol: &str,
    energy_kev: f64,
) -> Result<&'static ElementProperties, CrossSectionError> {
    let element = validated_energy(symbol, energy_kev)?;
    let (min, max) = energy_domain(symbol)?;
    if energy_kev < min || energy_kev > max {
        return Err(CrossSectionError::EnergyOutOfDomain {
            symbol: symbol.to_string(),
            energy: energy_kev,
            min,
            max,
        });
    }
    Ok(element)
}

pub fn mass_absorption_coefficient(
    symbol: &str,
    energy_kev: f64,
) -> Result<f64, CrossSectionError> {
    validated_energy(symbol, energy_kev)?;
    // Segment selection reports energies outside the fitted domain.
    let segment = fit_segment(symbol, energy_kev)?;
    Ok(segment.evaluate(energy_kev))
}

/// Low-energy rational approximation of the incoherent scattering coefficient.
pub fn mass_scattering_coefficient(
    symbol: &str,
    energy_kev: f64,
) -> Result<f64, CrossSectionError> {
    let element = validated_element(symbol, energy_kev)?;
    let x = energy_kev / SCATTERING_REFERENCE_ENERGY_KEV;
    let numerator = 1.0 + 1.148 * x + 0.06141 * x.powi(2);
    let denominator = 1.0 + 3.171 * x + 0.9328 * x.powi(2) + 0.02572 * x.powi(3);
    let molar = THOMSON_MOLAR_CROSS_SECTION * numerator / denominator;
    Ok(molar * element.z_over_a())
}

/// Incoherent scattering coefficient from the total Klein-Nishina cross section.
///
/// The closed form divides by powers of the reduced energy, so `E = 0` is reported
/// as [`CrossSectionError::InvalidEnergy`] rather than evaluated.
pub fn klein_nishina_mass_scattering_coefficient(
    symbol: &str,
    energy_kev: f64,
) -> Result<f64, CrossSectionError> {
    let element = validated_element(symbol, energy_kev)?;
    let x = energy_kev / SCATTERING_REFERENCE_ENERGY_KEV;
    let omega = 1.0 / (1.0 + 2.0 * x);
    let bracket = ((2.0 + 2.0 * x - x.powi(2)) / (2.0 * x.powi(3))) * omega.ln()
        + 2.0 * omega * (1.0 + x).powi(2) / x.powi(2)
        - omega.powi(2) * (1.0 + 3.0 * x);
    let molar = 0.75 * THOMSON_MOLAR_CROSS_SECTION * bracket;
    Ok(molar * element.z_over_a())
}

/// Photoelectric absorption plus the low-energy scattering approximation.
pub fn mass_attenuation_coefficient(
    symbol: &str,
    energy_kev: f64,
) -> Result<f64, CrossSectionError> {
    let absorption = mass_absorption_coefficient(symbol, energy_kev)?;
    let scattering = mass_scattering_coefficient(symbol, energy_kev)?;
    Ok(absorption + scattering)
}

pub fn mass_coefficient(
    symbol: &str,
    energy_kev: f64,
    kind: CrossSectionKind,
) -> Result<f64, CrossSectionError> {
    match kind {
        CrossSectionKind::Photoelectric => mass_absorption_coefficient(symbol, energy_kev),
        CrossSectionKind::Incoherent => mass_scattering_coefficient(symbol, energy_kev),
        CrossSectionKind::KleinNishina => {
            klein_nishina_mass_scattering_coefficient(symbol, energy_kev)
        }
        CrossSectionKind::Total => mass_attenuation_coefficient(symbol, energy_kev),
    }
}

/// Same quantity as [`mass_coefficient`], expressed in barn/atom.
pub fn atomic_cross_section_barn(
    symbol: &str,
    energy_kev: f64,
    kind: CrossSectionKind,
) -> Result<f64, CrossSectionError> {
    let coefficient = mass_coefficient(symbol, energy_kev, kind)?;
    Ok(coefficient * element_properties(symbol)?.barn_per_atom_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::elements::supported_elements;

    fn relative_difference(a: f64, b: f64) -> f64 {
        (a - b).abs() / b.abs()
    }

    const ALL_KINDS: [CrossSectionKind; 4] = [
        CrossSectionKind::Photoelectric,
        CrossSectionKind::Incoherent,
        CrossSectionKind::KleinNishina,
        CrossSectionKind::Total,
    ];

    #[test]
    fn absorption_at_shared_boundary_uses_upper_segment_closed_form() {
        let e: f64 = 0.1;
        let expected =
            3.051 / e - 7.818 / e.powi(2) + 11.44 / e.powi(3) + 0.06959 / e.powi(4);
        let value = mass_absorption_coefficient("H", e).unwrap();
        assert!(relative_difference(value, expected) < 1e-12);
        assert!(relative_difference(value, 11384.61) < 1e-9);
    }

    #[test]
    fn absorption_is_continuous_across_segment_boundaries() {
        let lower = crate::core::coefficients::FitSegment::new(
            0.014,
            0.1,
            [-6.383e+01, -6.446e+00, 1.317e+01, -5.045e-02],
        )
        .evaluate(0.1);
        let upper = mass_absorption_coefficient("H", 0.1).unwrap();
        assert!(relative_difference(lower, 11382.6) < 1e-9);
        assert!(relative_difference(lower, upper) < 1e-3);
    }

    #[test]
    fn absorption_matches_reference_values_inside_segments() {
        let hydrogen = mass_absorption_coefficient("H", 10.0).unwrap();
        assert!(relative_difference(hydrogen, 0.0027338) < 1e-9);
        let oxygen = mass_absorption_coefficient("O", 500.0).unwrap();
        assert!(relative_difference(oxygen, 2.4478e-05) < 1e-9);
    }

    #[test]
    fn scattering_matches_reference_values() {
        let cases = [
            ("H", 1.0, 0.39588924358496563),
            ("O", 100.0, 0.14838223141309867),
            ("Al", 500.0, 0.08390505606849985),
        ];
        for (symbol, energy, expected) in cases {
            let value = mass_scattering_coefficient(symbol, energy).unwrap();
            assert!(relative_difference(value, expected) < 1e-12, "{symbol} {energy}");
        }
    }

    #[test]
    fn klein_nishina_matches_reference_values() {
        let cases = [
            ("H", 1.0, 0.3959066183179943),
            ("O", 10.0, 0.1928529036665624),
            ("Al", 100.0, 0.1429715493314895),
        ];
        for (symbol, energy, expected) in cases {
            let value = klein_nishina_mass_scattering_coefficient(symbol, energy).unwrap();
            assert!(relative_difference(value, expected) < 1e-8, "{symbol} {energy}");
        }
    }

    #[test]
    fn klein_nishina_converges_to_fit_in_low_energy_limit() {
        let fit = mass_scattering_coefficient("H", 1.0).unwrap();
        let kn = klein_nishina_mass_scattering_coefficient("H", 1.0).unwrap();
        assert!(relative_difference(kn, fit) < 1e-3);
    }

    #[test]
    fn attenuation_is_exact_sum_of_absorption_and_scattering() {
        for symbol in supported_elements() {
            for energy in [0.01, 0.05, 0.1, 1.0, 4.0, 33.3, 100.0, 500.0] {
                let total = mass_attenuation_coefficient(symbol, energy).unwrap();
                let absorption = mass_absorption_coefficient(symbol, energy).unwrap();
                let scattering = mass_scattering_coefficient(symbol, energy).unwrap();
                assert_eq!(total, absorption + scattering, "{symbol} {energy}");
            }
        }
    }

    #[test]
    fn energies_outside_domain_fail_for_every_kind() {
        for symbol in supported_elements() {
            for energy in [0.005, 500.5] {
                for kind in ALL_KINDS {
                    assert!(
                        matches!(
                            mass_coefficient(symbol, energy, kind),
                            Err(CrossSectionError::EnergyOutOfDomain { .. })
                        ),
                        "{symbol} {energy} {kind:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn non_positive_or_non_finite_energy_is_invalid() {
        for energy in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            for kind in ALL_KINDS {
                assert!(
                    matches!(
                        mass_coefficient("H", energy, kind),
                        Err(CrossSectionError::InvalidEnergy(_))
                    ),
                    "{energy} {kind:?}"
                );
            }
        }
    }

    #[test]
    fn unknown_element_fails_for_every_kind() {
        for kind in ALL_KINDS {
            assert!(matches!(
                mass_coefficient("Fe", 10.0, kind),
                Err(CrossSectionError::UnknownElement(s)) if s == "Fe"
            ));
        }
    }

    #[test]
    fn absorption_reports_fitted_domain_bounds() {
        assert_eq!(
            mass_absorption_coefficient("O", 600.0),
            Err(CrossSectionError::EnergyOutOfDomain {
                symbol: "O".to_string(),
                energy: 600.0,
                min: 0.01,
                max: 500.0,
            })
        );
        assert_eq!(
            mass_absorption_coefficient("O", -600.0),
            Err(CrossSectionError::InvalidEnergy(-600.0))
        );
    }

    #[test]
    fn unknown_element_takes_precedence_over_invalid_energy() {
        assert!(matches!(
            mass_absorption_coefficient("Fe", 0.0),
            Err(CrossSectionError::UnknownElement(_))
        ));
    }

    #[test]
    fn coefficients_are_non_negative_across_domain() {
        for symbol in supported_elements() {
            let mut energy: f64 = 0.01;
            while energy <= 500.0 {
                for kind in ALL_KINDS {
                    let value = mass_coefficient(symbol, energy, kind).unwrap();
                    assert!(value >= 0.0, "{symbol} {energy} {kind:?}: {value}");
                }
                energy *= 1.1;
            }
        }
    }

    #[test]
    fn atomic_cross_section_scales_mass_coefficient() {
        let mass = mass_scattering_coefficient("O", 50.0).unwrap();
        let atomic = atomic_cross_section_barn("O", 50.0, CrossSectionKind::Incoherent).unwrap();
        assert!(relative_difference(atomic, mass * 26.57) < 1e-12);
    }
}
