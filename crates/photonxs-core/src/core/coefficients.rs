//! Piecewise photoelectric fit coefficients.
//!
//! Each element carries a sorted list of contiguous energy segments. Within a segment
//! the mass absorption coefficient is `A1/E + A2/E² + A3/E³ + A4/E⁴` (E in keV,
//! result in cm²/g). Data after Biggs F, Lighthill R., *Analytical approximations for
//! x-ray cross sections III*, Sandia National Laboratories SAND87-0070 (1988).

use super::cross_sections::CrossSectionError;
use super::elements::element_properties;
use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSegment {
    pub start: f64,
    pub finish: f64,
    pub coefficients: [f64; 4],
}

impl FitSegment {
    pub const fn new(start: f64, finish: f64, coefficients: [f64; 4]) -> Self {
        Self {
            start,
            finish,
            coefficients,
        }
    }

    #[inline]
    pub fn contains(&self, energy_kev: f64) -> bool {
        self.start <= energy_kev && energy_kev <= self.finish
    }

    #[inline]
    pub fn evaluate(&self, energy_kev: f64) -> f64 {
        let [a1, a2, a3, a4] = self.coefficients;
        a1 / energy_kev
            + a2 / energy_kev.powi(2)
            + a3 / energy_kev.powi(3)
            + a4 / energy_kev.powi(4)
    }
}

#[rustfmt::skip]
const HYDROGEN: &[FitSegment] = &[
    FitSegment::new(0.01,  0.014, [1.000e-08,  0.0,        0.0,       0.0]),
    FitSegment::new(0.014, 0.1,   [-6.383e+01, -6.446e+00, 1.317e+01, -5.045e-02]),
    FitSegment::new(0.1,   0.8,   [3.051e+00,  -7.818e+00, 1.144e+01, 6.959e-02]),
    FitSegment::new(0.8,   4.0,   [7.636e-02,  -9.406e-01, 6.144e+00, 1.425e+00]),
    FitSegment::new(4.0,   20.0,  [1.180e-03,  -8.236e-02, 2.886e+00, 5.534e+00]),
    FitSegment::new(20.0,  100.0, [1.620e-05,  -5.610e-03, 1.214e+00, 1.761e+01]),
    FitSegment::new(100.0, 500.0, [1.034e-06,  -4.114e-04, 6.287e-01, 3.927e+01]),
];

#[rustfmt::skip]
const OXYGEN: &[FitSegment] = &[
    FitSegment::new(0.01,   0.0483, [1.144e+04,  0.0,        0.0,       0.0]),
    FitSegment::new(0.0483, 0.532,  [-2.863e+02, 4.085e+02,  4.436e+01, -1.782e+00]),
    FitSegment::new(0.532,  4.0,    [-7.181e+01, 4.748e+02,  5.542e+03, -1.363e+03]),
    FitSegment::new(4.0,    20.0,   [2.745e+00,  -1.747e+02, 7.159e+03, -2.213e+03]),
    FitSegment::new(20.0,   100.0,  [3.774e-02,  -1.559e+01, 4.045e+03, 1.810e+04]),
    FitSegment::new(100.0,  500.0,  [3.169e-03,  1.473e+00,  7.214e+02, 4.048e+05]),
];

#[rustfmt::skip]
const ALUMINIUM: &[FitSegment] = &[
    FitSegment::new(0.01,   0.0159, [-1.654e+04, 1.585e+02,  3.907e+00,  -3.383e-02]),
    FitSegment::new(0.0159, 0.073,  [1.122e+03,  -4.015e+01, 6.623e-01,  -2.813e-03]),
    FitSegment::new(0.073,  0.1177, [2.390e+04,  -6.953e+02, -7.978e+01, 1.974e+00]),
    FitSegment::new(0.1177, 1.560,  [-5.284e+02, 1.399e+03,  4.360e+02,  -4.747e+01]),
    FitSegment::new(1.560,  20.0,   [-3.674e+00, -1.622e+01, 2.732e+04,  -1.752e+04]),
    FitSegment::new(20.0,   100.0,  [4.158e-01,  -1.351e+02, 2.716e+04,  3.723e+02]),
    FitSegment::new(100.0,  500.0,  [1.125e-02,  2.747e+00,  1.174e+04,  5.695e+05]),
];

static PHOTOELECTRIC_FITS: Map<&'static str, &'static [FitSegment]> = phf_map! {
    "H" => HYDROGEN,
    "O" => OXYGEN,
    "Al" => ALUMINIUM,
};

fn segments_for(symbol: &str) -> Result<&'static [FitSegment], CrossSectionError> {
    let element = element_properties(symbol)?;
    PHOTOELECTRIC_FITS
        .get(element.symbol)
        .copied()
        .ok_or_else(|| CrossSectionError::UnknownElement(symbol.to_string()))
}

/// Lowest START and highest FINISH of the element's fit segments, in keV.
pub fn energy_domain(symbol: &str) -> Result<(f64, f64), CrossSectionError> {
    let segments = segments_for(symbol)?;
    match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => Ok((first.start, last.finish)),
        _ => Err(CrossSectionError::UnknownElement(symbol.to_string())),
    }
}

/// Selects the fit segment containing `energy_kev`.
///
/// Segments are inclusive on both ends, so an energy lying exactly on a shared
/// boundary belongs to two segments. The segment whose START equals the energy
/// (the higher-energy one) wins; the top FINISH of the table still resolves to the
/// last segment.
pub fn fit_segment(
    symbol: &str,
    energy_kev: f64,
) -> Result<&'static FitSegment, CrossSectionError> {
    let segments = segments_for(symbol)?;

    let after = segments.partition_point(|segment| segment.start <= energy_kev);
    after
        .checked_sub(1)
        .map(|index| &segments[index])
        .filter(|segment| segment.contains(energy_kev))
        .ok_or_else(|| {
            let (min, max) = segments
                .first()
                .zip(segments.last())
                .map(|(first, last)| (first.start, last.finish))
                .unwrap_or((f64::NAN, f64::NAN));
            CrossSectionError::EnergyOutOfDomain {
                symbol: symbol.to_string(),
                energy: energy_kev,
                min,
                max,
            }
        })
}
