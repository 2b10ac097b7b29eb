//! # dverify
//!
//! Verification of Dilithium (round 3.1) post-quantum signatures.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dverify = "0.1"
//! ```
//!
//! ```no_run
//! use dverify::prelude::*;
//!
//! # fn check(pk: &[u8], sig: &[u8], msg: &[u8]) -> Result<()> {
//! let verifier = Dilithium3Verifier::new(pk)?;
//! if verifier.verify(sig, msg).is_ok() {
//!     // accepted
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the Dilithium verifiers
//! - `algorithms`: direct access to the polynomial, NTT and SHAKE primitives
//! - `serde`: serde support for the typed key and signature wrappers
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dverify-api`]: Error types and the `Verifier` trait
//! - [`dverify-params`]: Parameter sets and sizes
//! - [`dverify-algorithms`]: Polynomial arithmetic and SHAKE
//! - [`dverify-sign`]: Dilithium verification

// Core re-exports (always available)
pub use dverify_api as api;
pub use dverify_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use dverify_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use dverify_sign as sign;

/// Common imports for dverify users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Rejected, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::Verifier;

    pub use crate::params::pqc::dilithium::{
        Dilithium2Params, Dilithium3Params, Dilithium5Params, DilithiumSchemeParams,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        Dilithium2, Dilithium2Verifier, Dilithium3, Dilithium3Verifier, Dilithium5,
        Dilithium5Verifier, DilithiumPublicKey, DilithiumSignature, DilithiumVerifier,
        VerifyStage,
    };
}
