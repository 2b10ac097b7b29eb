//! Public API traits and error types for the dverify library
//!
//! This crate is the surface shared by every verifier in the workspace: the
//! error taxonomy reported to callers, the uniform [`Rejected`] outcome and
//! the [`Verifier`] trait implemented by each parameter set.

pub mod error;
pub mod traits;

pub use error::{Error, Rejected, Result, ResultExt};
pub use traits::{verifier, Verifier};
