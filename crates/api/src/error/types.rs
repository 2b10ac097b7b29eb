//! Error type definitions for the verification API

use thiserror::Error;

/// Primary error type for signature verification
///
/// The first two variants are structural and are raised before any
/// polynomial arithmetic runs. `SignatureInvalid` is a well-formed input that
/// failed a cryptographic check; `stage` names the check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Public key of the wrong length or encoding
    #[error("malformed public key: {context}: {message}")]
    MalformedKey {
        /// Where the problem was detected
        context: &'static str,
        /// What was wrong with the key
        message: String,
    },

    /// Signature of the wrong length, with out-of-range z or invalid hints
    #[error("malformed signature: {context}: {message}")]
    MalformedSignature {
        /// Where the problem was detected
        context: &'static str,
        /// What was wrong with the signature
        message: String,
    },

    /// Norm bound or challenge mismatch
    #[error("invalid signature: {context}: rejected at {stage}")]
    SignatureInvalid {
        /// Algorithm or call site
        context: &'static str,
        /// Verification stage that rejected the signature
        stage: &'static str,
    },

    /// An arithmetic invariant was violated
    #[error("internal failure: {context}: {message}")]
    InternalFailure {
        /// Where the failure occurred
        context: &'static str,
        /// Details about the failure
        message: String,
    },
}

/// Result type for verification operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::MalformedKey { message, .. } => Self::MalformedKey { context, message },
            Self::MalformedSignature { message, .. } => {
                Self::MalformedSignature { context, message }
            }
            Self::SignatureInvalid { stage, .. } => Self::SignatureInvalid { context, stage },
            Self::InternalFailure { message, .. } => Self::InternalFailure { context, message },
        }
    }

    /// Replace the message of an existing error
    ///
    /// `SignatureInvalid` carries no message and is returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::MalformedKey { context, .. } => Self::MalformedKey { context, message },
            Self::MalformedSignature { context, .. } => {
                Self::MalformedSignature { context, message }
            }
            Self::InternalFailure { context, .. } => Self::InternalFailure { context, message },
            other @ Self::SignatureInvalid { .. } => other,
        }
    }

    /// Returns the context string of any variant
    pub fn context(&self) -> &'static str {
        match self {
            Self::MalformedKey { context, .. }
            | Self::MalformedSignature { context, .. }
            | Self::SignatureInvalid { context, .. }
            | Self::InternalFailure { context, .. } => context,
        }
    }

    /// True for errors detected while decoding, before any arithmetic
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedKey { .. } | Self::MalformedSignature { .. })
    }
}

/// Uniform verification outcome
///
/// Carries no reason, so every rejection looks the same to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[error("signature verification failed")]
pub struct Rejected;

impl From<Error> for Rejected {
    fn from(_: Error) -> Self {
        Rejected
    }
}
