use crate::core::constants::PhysicalConstants;
use crate::core::groups::{EnergyGroup, GroupError, GroupStructure};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid angle tolerance {0}: tolerance must be finite and non-negative")]
    InvalidTolerance(f64),
    #[error("Invalid physical constants {0:?}: every constant must be finite and positive")]
    InvalidConstants(PhysicalConstants),
    #[error("Invalid energy group structure: {source}")]
    Groups {
        #[from]
        source: GroupError,
    },
}

/// How the kinematic scattering cosine is compared against the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AngleMatch {
    /// Bitwise floating-point equality. Two independently rounded cosines rarely
    /// coincide, so most energy pairs are rejected; kept for parity with reference
    /// results.
    #[default]
    Exact,
    /// Accept pairs whose cosines differ by at most the given absolute tolerance.
    Tolerance(f64),
}

impl AngleMatch {
    #[inline]
    pub fn matches(&self, chi: f64, chi_m: f64) -> bool {
        match *self {
            AngleMatch::Exact => chi == chi_m,
            AngleMatch::Tolerance(tolerance) => (chi - chi_m).abs() <= tolerance,
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        match self {
            AngleMatch::Tolerance(tolerance) if !tolerance.is_finite() || tolerance < 0.0 => {
                Err(ConfigError::InvalidTolerance(tolerance))
            }
            other => Ok(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransferConfig {
    pub groups: GroupStructure,
    pub constants: PhysicalConstants,
    pub angle_match: AngleMatch,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TransferConfigFile {
    angle_tolerance: Option<f64>,
    #[serde(default)]
    constants: PhysicalConstants,
    groups: Option<Vec<EnergyGroup>>,
}

impl TransferConfig {
    pub fn builder() -> TransferConfigBuilder {
        TransferConfigBuilder::new()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Toml { source, .. } => ConfigError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: TransferConfigFile = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: "<inline>".to_string(),
            source: e,
        })?;

        let mut builder = TransferConfigBuilder::new().constants(file.constants);
        if let Some(groups) = file.groups {
            builder = builder.groups(groups);
        }
        if let Some(tolerance) = file.angle_tolerance {
            builder = builder.angle_match(AngleMatch::Tolerance(tolerance));
        }
        builder.build()
    }
}

#[derive(Default)]
pub struct TransferConfigBuilder {
    groups: Option<Vec<EnergyGroup>>,
    constants: Option<PhysicalConstants>,
    angle_match: Option<AngleMatch>,
}

impl TransferConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(mut self, groups: Vec<EnergyGroup>) -> Self {
        self.groups = Some(groups);
        self
    }
    pub fn constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = Some(constants);
        self
    }
    pub fn angle_match(mut self, angle_match: AngleMatch) -> Self {
        self.angle_match = Some(angle_match);
        self
    }

    pub fn build(self) -> Result<TransferConfig, ConfigError> {
        Ok(TransferConfig {
            groups: match self.groups {
                Some(groups) => GroupStructure::new(groups)?,
                None => GroupStructure::default(),
            },
            constants: validate_constants(self.constants.unwrap_or_default())?,
            angle_match: self.angle_match.unwrap_or_default().validate()?,
        })
    }
}

fn validate_constants(constants: PhysicalConstants) -> Result<PhysicalConstants, ConfigError> {
    if constants.is_physical() {
        Ok(constants)
    } else {
        Err(ConfigError::InvalidConstants(constants))
    }
}
