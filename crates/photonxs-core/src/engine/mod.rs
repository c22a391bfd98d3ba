//! # Engine Module
//!
//! Numerical machinery for group-to-group angular Compton transfer matrices.
//!
//! ## Overview
//!
//! A transfer matrix element is a double sum over the quadrature energies of an
//! incoming and an outgoing energy group. Each pair of energies is admitted when it
//! is kinematically reachable by one Compton scattering and when the implied
//! scattering cosine matches the cosine between the two requested directions.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - group structure, constants and angle-matching policy
//! - **Diagnostics** ([`diagnostics`]) - opt-in callback reporting quadrature points
//! - **Error Handling** ([`error`]) - engine-specific error types
//! - **Integration** ([`transfer`]) - the matrix element computation itself

pub mod config;
pub(crate) mod context;
pub mod diagnostics;
pub mod error;
pub mod transfer;

pub use context::TransferContext;
