use crate::engine::TransferContext;
use crate::engine::config::TransferConfig;
use crate::engine::diagnostics::DiagnosticReporter;
use crate::engine::error::EngineError;
use crate::engine::transfer::group_angle_transfer_matrix_element as integrate_group_pair;
use nalgebra::{DMatrix, Vector3};
use std::sync::LazyLock;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

static DEFAULT_CONFIG: LazyLock<TransferConfig> = LazyLock::new(TransferConfig::default);

/// Transfer matrix element on the standard six-group structure with exact angle
/// matching and no diagnostics.
pub fn group_angle_transfer_matrix_element(
    group_in: usize,
    group_out: usize,
    direction_in: &Vector3<f64>,
    direction_out: &Vector3<f64>,
) -> Result<f64, EngineError> {
    let reporter = DiagnosticReporter::new();
    let context = TransferContext::new(&DEFAULT_CONFIG, &reporter);
    integrate_group_pair(&context, group_in, group_out, direction_in, direction_out)
}

/// Group-to-group transfer matrix for one pair of directions.
///
/// Rows index the incoming group, columns the outgoing group.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferMatrix {
    values: DMatrix<f64>,
}

impl TransferMatrix {
    pub fn group_count(&self) -> usize {
        self.values.nrows()
    }

    pub fn get(&self, group_in: usize, group_out: usize) -> Option<f64> {
        self.values.get((group_in, group_out)).copied()
    }

    /// Sum over all outgoing groups for one incoming group.
    pub fn outscatter(&self, group_in: usize) -> Option<f64> {
        (group_in < self.group_count()).then(|| self.values.row(group_in).sum())
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }
}

#[instrument(skip_all, name = "transfer_matrix_workflow")]
pub fn run(
    config: &TransferConfig,
    direction_in: &Vector3<f64>,
    direction_out: &Vector3<f64>,
    reporter: &DiagnosticReporter,
) -> Result<TransferMatrix, EngineError> {
    let context = TransferContext::new(config, reporter);
    let group_count = config.groups.len();

    let pairs: Vec<(usize, usize)> = (0..group_count)
        .flat_map(|group_in| (0..group_count).map(move |group_out| (group_in, group_out)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    let values: Vec<f64> = iterator
        .map(|&(group_in, group_out)| {
            integrate_group_pair(&context, group_in, group_out, direction_in, direction_out)
        })
        .collect::<Result<_, _>>()?;

    let values = DMatrix::from_row_slice(group_count, group_count, &values);
    let non_zero = values.iter().filter(|value| **value != 0.0).count();
    info!(
        "Transfer matrix complete: {} of {} group pair(s) non-zero.",
        non_zero,
        values.len()
    );

    Ok(TransferMatrix { values })
}
