//! Generic Polynomial Engine
//!
//! This module provides polynomial arithmetic over R_Q = Z_Q[X]/(X^256 + 1),
//! the number theoretic transform, and coefficient bit packing.

pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::ntt::{montgomery_reduce, InverseNttOperator, NttOperator};
    pub use super::params::{DilithiumParams, Modulus, NttModulus, N};
    pub use super::polynomial::Polynomial;
    pub use super::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};
}
