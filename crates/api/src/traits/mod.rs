//! Trait definitions for signature verification

pub mod verifier;

pub use verifier::Verifier;
