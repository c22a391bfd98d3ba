use super::config::TransferConfig;
use super::diagnostics::DiagnosticReporter;
use super::error::EngineError;
use crate::core::groups::EnergyGroup;

#[derive(Clone, Copy)]
pub struct TransferContext<'a> {
    pub config: &'a TransferConfig,
    pub reporter: &'a DiagnosticReporter<'a>,
}

impl<'a> TransferContext<'a> {
    pub fn new(config: &'a TransferConfig, reporter: &'a DiagnosticReporter<'a>) -> Self {
        Self { config, reporter }
    }

    pub fn group(&self, index: usize) -> Result<&'a EnergyGroup, EngineError> {
        self.config
            .groups
            .get(index)
            .ok_or(EngineError::UnknownGroup {
                index,
                count: self.config.groups.len(),
            })
    }
}
