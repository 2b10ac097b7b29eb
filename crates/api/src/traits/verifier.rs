//! Trait definition for signature verifiers

use crate::Result;

/// Trait for signature schemes that can verify
///
/// Key generation and signing are outside this trait; implementors only
/// decide whether a signature over a message was produced by the holder of
/// the secret key matching `public_key`.
pub trait Verifier {
    /// Public key type
    type PublicKey: AsRef<[u8]> + Clone;
    /// Signature type
    type SignatureData: AsRef<[u8]> + Clone;

    /// Returns the algorithm name
    fn name() -> &'static str;

    /// Size of an encoded public key in bytes
    fn public_key_size() -> usize;

    /// Size of an encoded signature in bytes
    fn signature_size() -> usize;

    /// Verify a signature on a message
    ///
    /// # Errors
    ///
    /// Structural problems are reported as `MalformedKey` or
    /// `MalformedSignature`, failed checks as `SignatureInvalid`.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
