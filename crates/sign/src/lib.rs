//! Digital signature verification
//!
//! This crate implements verification for the Dilithium post-quantum
//! signature schemes at NIST security levels 2, 3 and 5.

#![forbid(unsafe_code)]

pub mod error;
pub mod pq;

pub use error::{Error, Result};

// Re-exports from post-quantum schemes
pub use pq::dilithium::{
    Dilithium, Dilithium2, Dilithium2Verifier, Dilithium3, Dilithium3Verifier, Dilithium5,
    Dilithium5Verifier, DilithiumPublicKey, DilithiumSignature, DilithiumVerifier, VerifyStage,
};
