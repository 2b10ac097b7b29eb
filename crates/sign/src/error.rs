//! Error types for the signature crate

use core::fmt;

use crate::pq::dilithium::VerifyStage;

/// Errors that can occur during signature verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key size
    InvalidKeySize {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid signature size
    InvalidSignatureSize {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Correctly sized signature with an invalid internal structure
    Deserialization {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Value that cannot be represented in the packed format
    Encoding {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Well-formed signature that failed a cryptographic check
    Verification {
        algorithm: &'static str,
        stage: VerifyStage,
    },

    /// Internal error
    Internal(String),
}

impl Error {
    /// Helper to convert from algorithms error
    pub fn from_algo(err: dverify_algorithms::Error) -> Self {
        Self::Internal(format!("Algorithm error: {}", err))
    }

    /// Stage of the verification pipeline the error belongs to, if known
    pub fn stage(&self) -> Option<VerifyStage> {
        match self {
            Error::InvalidKeySize { .. }
            | Error::InvalidSignatureSize { .. }
            | Error::Deserialization { .. } => Some(VerifyStage::Parsing),
            Error::Verification { stage, .. } => Some(*stage),
            Error::Encoding { .. } | Error::Internal(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize {
                algorithm,
                expected,
                actual,
            } => write!(
                f,
                "{} invalid key size: expected {}, got {}",
                algorithm, expected, actual
            ),
            Error::InvalidSignatureSize {
                algorithm,
                expected,
                actual,
            } => write!(
                f,
                "{} invalid signature size: expected {}, got {}",
                algorithm, expected, actual
            ),
            Error::Deserialization { algorithm, details } => {
                write!(f, "{} deserialization error: {}", algorithm, details)
            }
            Error::Encoding { algorithm, details } => {
                write!(f, "{} encoding error: {}", algorithm, details)
            }
            Error::Verification { algorithm, stage } => {
                write!(f, "{} verification failed at {}", algorithm, stage)
            }
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<dverify_algorithms::Error> for Error {
    fn from(err: dverify_algorithms::Error) -> Self {
        Self::from_algo(err)
    }
}

// Convert to api::Error
impl From<Error> for dverify_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKeySize { algorithm, .. } => dverify_api::Error::MalformedKey {
                context: algorithm,
                message: err.to_string(),
            },
            Error::InvalidSignatureSize { algorithm, .. } => {
                dverify_api::Error::MalformedSignature {
                    context: algorithm,
                    message: err.to_string(),
                }
            }
            Error::Deserialization { algorithm, details } => {
                dverify_api::Error::MalformedSignature {
                    context: algorithm,
                    message: details.to_string(),
                }
            }
            Error::Verification { algorithm, stage } => dverify_api::Error::SignatureInvalid {
                context: algorithm,
                stage: stage.as_str(),
            },
            Error::Encoding { algorithm, details } => dverify_api::Error::InternalFailure {
                context: algorithm,
                message: details.to_string(),
            },
            Error::Internal(message) => dverify_api::Error::InternalFailure {
                context: "sign",
                message,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
