//! # Core Module
//!
//! Stateless data and physics used by every other layer of the library.
//!
//! - **Physical constants** ([`constants`]) - electron radius and rest mass
//! - **Element data** ([`elements`]) - atomic number, atomic mass and unit conversion per element
//! - **Photoelectric fits** ([`coefficients`]) - piecewise rational fit segments keyed by element
//! - **Energy groups** ([`groups`]) - validated multigroup energy structures
//! - **Kinematics** ([`kinematics`]) - Compton scattering relations
//! - **Cross sections** ([`cross_sections`]) - absorption, scattering and attenuation coefficients
//!
//! All tables are compiled into the binary and never change at runtime, so every
//! function here can be called concurrently without synchronization.

pub mod coefficients;
pub mod constants;
pub mod cross_sections;
pub mod elements;
pub mod groups;
pub mod kinematics;
