//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] data to the
//! [`crate::engine`] integration.
//!
//! - [`transfer`] - single transfer matrix elements with default settings, and the
//!   complete group-to-group matrix for one pair of directions

pub mod transfer;
