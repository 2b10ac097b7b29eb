//! Lattice arithmetic primitives for the dverify workspace
//!
//! This crate provides the building blocks the signature verifiers are
//! assembled from:
//!
//! - [`poly`]: polynomials over Z_Q[X]/(X^256 + 1), the NTT, and bit packing
//! - [`xof`]: SHAKE-128 and SHAKE-256 behind an absorb/squeeze interface
//!
//! All arithmetic on coefficients is branch-free and the crate works in
//! `no_std` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial engine
pub mod poly;

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};
