use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GroupError {
    #[error("Energy group structure must contain at least one group")]
    Empty,
    #[error(
        "Group {index} has invalid bounds: start {start} keV must exceed stop {stop} keV and stop must not be negative"
    )]
    InvalidBounds { index: usize, start: f64, stop: f64 },
    #[error(
        "Group {index} has invalid step {step} keV: step must be negative, shorter than the span {span} keV and keep every energy positive"
    )]
    InvalidStep { index: usize, step: f64, span: f64 },
}

/// One band of photon energies, enumerated from `start` down towards `stop`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnergyGroup {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl EnergyGroup {
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.start - self.stop
    }

    fn validate(&self, index: usize) -> Result<(), GroupError> {
        if !self.start.is_finite()
            || !self.stop.is_finite()
            || self.stop < 0.0
            || self.start <= self.stop
        {
            return Err(GroupError::InvalidBounds {
                index,
                start: self.start,
                stop: self.stop,
            });
        }
        let span = self.span();
        // A rounded point count can land the last energy on a zero stop.
        if !self.step.is_finite()
            || self.step >= 0.0
            || -self.step >= span
            || self.energies().last().is_some_and(|energy| energy <= 0.0)
        {
            return Err(GroupError::InvalidStep {
                index,
                step: self.step,
                span,
            });
        }
        Ok(())
    }

    /// Number of quadrature energies in `[start, stop)`.
    pub fn point_count(&self) -> usize {
        ((self.stop - self.start) / self.step).ceil().max(0.0) as usize
    }

    /// Quadrature energies `start, start + step, ...`, excluding `stop`.
    pub fn energies(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.point_count()).map(move |i| self.start + i as f64 * self.step)
    }
}

pub const STANDARD_GROUPS: [EnergyGroup; 6] = [
    EnergyGroup::new(150.0, 125.0, -1.0),
    EnergyGroup::new(125.0, 100.0, -1.0),
    EnergyGroup::new(100.0, 75.0, -1.0),
    EnergyGroup::new(75.0, 50.0, -1.0),
    EnergyGroup::new(50.0, 25.0, -1.0),
    EnergyGroup::new(25.0, 0.0, -1.0),
];

/// Ordered, validated list of energy groups. Group 0 is the most energetic.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStructure {
    groups: Vec<EnergyGroup>,
}

impl GroupStructure {
    pub fn new(groups: Vec<EnergyGroup>) -> Result<Self, GroupError> {
        if groups.is_empty() {
            return Err(GroupError::Empty);
        }
        for (index, group) in groups.iter().enumerate() {
            group.validate(index)?;
        }
        Ok(Self { groups })
    }

    pub fn get(&self, index: usize) -> Option<&EnergyGroup> {
        self.groups.get(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnergyGroup> {
        self.groups.iter()
    }

    /// Group boundaries from the top of group 0 down to the bottom of the last group.
    pub fn boundaries(&self) -> Vec<f64> {
        let mut boundaries: Vec<f64> = self.groups.iter().map(|group| group.start).collect();
        boundaries.extend(self.groups.last().map(|group| group.stop));
        boundaries
    }
}

impl Default for GroupStructure {
    fn default() -> Self {
        Self {
            groups: STANDARD_GROUPS.to_vec(),
        }
    }
}
