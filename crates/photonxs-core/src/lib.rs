//! # photonxs
//!
//! Photon interaction cross sections for light elements and multigroup Compton
//! transfer matrices for discrete-ordinates photon transport.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the physics stays pure and the
//! integration machinery stays configurable.
//!
//! - **[`core`]: The Foundation.** Static element data, piecewise photoelectric fit
//!   coefficients, energy-group structures, Compton kinematics and the pure
//!   cross-section evaluator.
//!
//! - **[`engine`]: The Integration Core.** Configuration, diagnostics and the double
//!   energy integration that produces one group-to-group angular transfer matrix
//!   element.
//!
//! - **[`workflows`]: The Public API.** Ready-made entry points that combine `core`
//!   and `engine`, from a single matrix element with default settings to the full
//!   transfer matrix for a pair of directions.

pub mod core;
pub mod engine;
pub mod workflows;
