use super::context::TransferContext;
use super::diagnostics::Diagnostic;
use super::error::EngineError;
use crate::core::kinematics::{
    compton_edge, klein_nishina_kernel, scattering_cosine, wavelength_ratio,
};
use nalgebra::Vector3;
use tracing::{debug, instrument};

/// Angular Compton transfer matrix element from `group_in` into `group_out`, in barn.
///
/// The incoming and outgoing groups are sampled at their quadrature energies. A pair
/// `(E_in, E_out)` contributes the Klein-Nishina kernel when `E_out` lies between
/// the Compton edge of `E_in` and `E_in` itself and the scattering cosine implied by
/// the wavelength shift matches `direction_in · direction_out` under the configured
/// [`AngleMatch`](super::config::AngleMatch). Each incoming energy is weighted by
/// `|step| / (E_in² · span)`. Weighting by the signed (negative) step instead
/// would flip the sign of every element; the magnitudes are identical.
///
/// Both directions are expected to be unit vectors; they are not normalized here.
#[instrument(
    level = "debug",
    skip(context, direction_in, direction_out),
    name = "transfer_matrix_element"
)]
pub fn group_angle_transfer_matrix_element(
    context: &TransferContext,
    group_in: usize,
    group_out: usize,
    direction_in: &Vector3<f64>,
    direction_out: &Vector3<f64>,
) -> Result<f64, EngineError> {
    let incoming = context.group(group_in)?;
    let outgoing = context.group(group_out)?;
    let constants = &context.config.constants;
    let angle_match = context.config.angle_match;
    let reporter = context.reporter;
    let rest_mass = constants.electron_rest_mass_kev;

    reporter.report(Diagnostic::PairStart {
        group_in,
        group_out,
    });

    let chi_m = direction_in.dot(direction_out);
    let weight = incoming.step.abs();
    let span = incoming.span();

    let mut admitted = 0usize;
    let mut matched = 0usize;
    let mut integral_in = 0.0;

    for e_in in incoming.energies() {
        let lambda_in = wavelength_ratio(rest_mass, e_in);
        let e_max = e_in;
        let e_min = compton_edge(rest_mass, e_in);

        let mut integral_out = 0.0;
        for e_out in outgoing.energies() {
            if e_out > e_max || e_out < e_min {
                continue;
            }
            admitted += 1;

            let lambda_out = wavelength_ratio(rest_mass, e_out);
            let chi = scattering_cosine(lambda_in, lambda_out);
            if reporter.is_enabled() {
                reporter.report(Diagnostic::AdmissiblePoint {
                    e_in,
                    e_out,
                    e_min,
                    e_max,
                    chi,
                });
            }

            if angle_match.matches(chi, chi_m) {
                matched += 1;
                integral_out += klein_nishina_kernel(e_in, e_out, chi);
            }
        }

        integral_in += weight / (e_in.powi(2) * span) * integral_out;
    }

    let value = 0.5 * constants.electron_classical_radius_squared_barn * rest_mass * integral_in;

    debug!(
        chi_m,
        admitted,
        matched,
        value,
        "Integrated group pair over quadrature energies."
    );
    reporter.report(Diagnostic::PairFinish {
        group_in,
        group_out,
        value,
    });

    Ok(value)
}
