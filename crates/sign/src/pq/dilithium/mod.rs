//! Dilithium signature verification (round 3.1)
//!
//! This module provides verifiers for Dilithium2, Dilithium3 and Dilithium5,
//! the lattice-based signature schemes from the NIST post-quantum process.
//! Only verification is implemented; keys and signatures are consumed in
//! their packed byte form.
//!
//! Internal operations are found in submodules:
//! - `polyvec`: `PolyVecL`, `PolyVecK` and matrix-vector products.
//! - `arithmetic`: `Decompose`, `HighBits`, `UseHint` and the norm check.
//! - `sampling`: expansion of the matrix A and the challenge polynomial c.
//! - `encoding`: byte layouts of public keys, signatures and w1.
//! - `verify`: the staged verification pipeline.

use core::fmt;
use core::marker::PhantomData;

use tracing::debug_span;

use dverify_api::{Rejected, ResultExt, Result as ApiResult, Verifier as VerifierTrait};
use dverify_params::pqc::dilithium::{
    Dilithium2Params, Dilithium3Params, Dilithium5Params, DilithiumSchemeParams, TR_BYTES,
};

pub mod arithmetic;
pub mod encoding;
pub mod polyvec;
pub mod sampling;
mod verify;

pub use encoding::{HintVector, PublicKeyParts, SignatureParts};
pub use verify::{verify, VerifyStage};

use crate::error::Error as SignError;

macro_rules! byte_wrapper {
    ($(#[$meta:meta])* $name:ident, $size:ident, $what:literal) => {
        $(#[$meta])*
        pub struct $name<P: DilithiumSchemeParams> {
            bytes: Vec<u8>,
            _params: PhantomData<P>,
        }

        impl<P: DilithiumSchemeParams> $name<P> {
            /// Wraps bytes after checking their length
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignError> {
                Self::try_from(bytes)
            }

            /// Encoded bytes
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }

            /// Consumes the wrapper and returns the encoded bytes
            pub fn into_bytes(self) -> Vec<u8> {
                self.bytes
            }
        }

        impl<P: DilithiumSchemeParams> Clone for $name<P> {
            fn clone(&self) -> Self {
                Self {
                    bytes: self.bytes.clone(),
                    _params: PhantomData,
                }
            }
        }

        impl<P: DilithiumSchemeParams> PartialEq for $name<P> {
            fn eq(&self, other: &Self) -> bool {
                self.bytes == other.bytes
            }
        }

        impl<P: DilithiumSchemeParams> Eq for $name<P> {}

        impl<P: DilithiumSchemeParams> fmt::Debug for $name<P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("algorithm", &P::NAME)
                    .field("len", &self.bytes.len())
                    .finish()
            }
        }

        impl<P: DilithiumSchemeParams> AsRef<[u8]> for $name<P> {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl<P: DilithiumSchemeParams> From<Vec<u8>> for $name<P> {
            fn from(bytes: Vec<u8>) -> Self {
                Self {
                    bytes,
                    _params: PhantomData,
                }
            }
        }

        impl<P: DilithiumSchemeParams> TryFrom<&[u8]> for $name<P> {
            type Error = SignError;

            fn try_from(bytes: &[u8]) -> Result<Self, SignError> {
                if bytes.len() != P::$size {
                    return Err(byte_wrapper!(@size_error $size, P::NAME, P::$size, bytes.len()));
                }
                Ok(Self::from(bytes.to_vec()))
            }
        }

        #[cfg(feature = "serde")]
        impl<P: DilithiumSchemeParams> serde::Serialize for $name<P> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&self.bytes)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, P: DilithiumSchemeParams> serde::Deserialize<'de> for $name<P> {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
                if bytes.len() != P::$size {
                    return Err(serde::de::Error::invalid_length(bytes.len(), &$what));
                }
                Ok(Self::from(bytes))
            }
        }
    };
    (@size_error PUBLIC_KEY_BYTES, $alg:expr, $expected:expr, $actual:expr) => {
        SignError::InvalidKeySize {
            algorithm: $alg,
            expected: $expected,
            actual: $actual,
        }
    };
    (@size_error SIGNATURE_SIZE, $alg:expr, $expected:expr, $actual:expr) => {
        SignError::InvalidSignatureSize {
            algorithm: $alg,
            expected: $expected,
            actual: $actual,
        }
    };
}

byte_wrapper!(
    /// Dilithium public key, packed `rho || t1`
    DilithiumPublicKey,
    PUBLIC_KEY_BYTES,
    "a packed Dilithium public key"
);

byte_wrapper!(
    /// Dilithium signature, packed `c_tilde || z || h`
    DilithiumSignature,
    SIGNATURE_SIZE,
    "a packed Dilithium signature"
);

/// Generic Dilithium verifier parameterized by `P: DilithiumSchemeParams`.
pub struct Dilithium<P: DilithiumSchemeParams> {
    _params: PhantomData<P>,
}

impl<P: DilithiumSchemeParams> VerifierTrait for Dilithium<P> {
    type PublicKey = DilithiumPublicKey<P>;
    type SignatureData = DilithiumSignature<P>;

    fn name() -> &'static str {
        P::NAME
    }

    fn public_key_size() -> usize {
        P::PUBLIC_KEY_BYTES
    }

    fn signature_size() -> usize {
        P::SIGNATURE_SIZE
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        verify::verify::<P>(public_key.as_bytes(), message, signature.as_bytes())
            .map_err(dverify_api::Error::from)
    }
}

/// Verifier bound to one public key
///
/// The key is decoded and hashed once in [`new`](Self::new), so repeated
/// verifications under the same key skip both steps.
#[derive(Debug, Clone)]
pub struct DilithiumVerifier<P: DilithiumSchemeParams> {
    key: PublicKeyParts<P>,
    tr: [u8; TR_BYTES],
}

impl<P: DilithiumSchemeParams> DilithiumVerifier<P> {
    /// Decodes `public_key`, rejecting any other length than `P::PUBLIC_KEY_BYTES`
    pub fn new(public_key: &[u8]) -> ApiResult<Self> {
        let key = encoding::unpack_public_key::<P>(public_key)?;
        let tr = verify::hash_public_key(public_key)?;
        Ok(Self { key, tr })
    }

    /// Builds a verifier from a typed public key
    pub fn from_public_key(public_key: &DilithiumPublicKey<P>) -> ApiResult<Self> {
        Self::new(public_key.as_bytes())
    }

    /// Verifies `signature` over `message`, hiding the reason of a rejection
    pub fn verify(&self, signature: &[u8], message: &[u8]) -> Result<(), Rejected> {
        self.verify_detailed(signature, message).uniform()
    }

    /// Verifies `signature` over `message`, reporting why it was rejected
    pub fn verify_detailed(&self, signature: &[u8], message: &[u8]) -> ApiResult<()> {
        let span = debug_span!("dilithium_verify", algorithm = P::NAME);
        let _enter = span.enter();
        verify::verify_prepared(&self.key, &self.tr, message, signature)
            .map_err(dverify_api::Error::from)
    }

    /// The decoded public key
    pub fn public_key(&self) -> &PublicKeyParts<P> {
        &self.key
    }
}

/// Dilithium2 verifier (NIST security level 2)
pub type Dilithium2 = Dilithium<Dilithium2Params>;
/// Dilithium3 verifier (NIST security level 3)
pub type Dilithium3 = Dilithium<Dilithium3Params>;
/// Dilithium5 verifier (NIST security level 5)
pub type Dilithium5 = Dilithium<Dilithium5Params>;

/// Key-bound Dilithium2 verifier
pub type Dilithium2Verifier = DilithiumVerifier<Dilithium2Params>;
/// Key-bound Dilithium3 verifier
pub type Dilithium3Verifier = DilithiumVerifier<Dilithium3Params>;
/// Key-bound Dilithium5 verifier
pub type Dilithium5Verifier = DilithiumVerifier<Dilithium5Params>;
