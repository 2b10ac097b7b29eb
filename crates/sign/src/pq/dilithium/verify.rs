//! Signature verification pipeline.
//!
//! `Parsing → BoundChecking → MatrixRecompute → HintReconstruct →
//! ChallengeRecompute → Decision`. Each rejection is reported with the
//! stage that produced it and logged once at `debug` level.

use core::fmt;

use subtle::ConstantTimeEq;
use tracing::{debug, debug_span, trace};

use dverify_algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use dverify_params::pqc::dilithium::{DilithiumSchemeParams, C_TILDE_BYTES, MU_BYTES, TR_BYTES};

use super::arithmetic::{check_norm_polyvec_l, use_hint_polyveck};
use super::encoding::{
    pack_polyveck_w1, unpack_public_key, unpack_signature, PublicKeyParts, SignatureParts,
};
use super::polyvec::{matrix_polyvecl_mul, PolyVecK};
use super::sampling::{expand_matrix_a, sample_in_ball};
use crate::error::{Error, Result};

/// Stage of the verification pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerifyStage {
    /// Decoding the public key and signature
    Parsing,
    /// Checking the infinity norm of z
    BoundChecking,
    /// Computing A·z - c·t1·2^d
    MatrixRecompute,
    /// Applying the hints to recover w1
    HintReconstruct,
    /// Hashing mu and w1 into the challenge seed
    ChallengeRecompute,
    /// Comparing the challenge seeds
    Decision,
}

impl VerifyStage {
    /// Stable lowercase name of the stage
    pub const fn as_str(self) -> &'static str {
        match self {
            VerifyStage::Parsing => "parsing",
            VerifyStage::BoundChecking => "bound checking",
            VerifyStage::MatrixRecompute => "matrix recompute",
            VerifyStage::HintReconstruct => "hint reconstruct",
            VerifyStage::ChallengeRecompute => "challenge recompute",
            VerifyStage::Decision => "decision",
        }
    }
}

impl fmt::Display for VerifyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn reject(stage: VerifyStage, err: Error) -> Error {
    debug!(stage = %stage, reason = %err, "signature rejected");
    err
}

/// tr = SHAKE256(pk), 32 bytes
pub(crate) fn hash_public_key(public_key: &[u8]) -> Result<[u8; TR_BYTES]> {
    let mut tr = [0u8; TR_BYTES];
    ShakeXof256::digest_into(&[public_key], &mut tr)?;
    Ok(tr)
}

/// Verifies `signature` over `message` under an encoded `public_key`.
///
/// Lengths are checked before any arithmetic runs.
pub fn verify<P: DilithiumSchemeParams>(
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<()> {
    let span = debug_span!("dilithium_verify", algorithm = P::NAME);
    let _enter = span.enter();

    trace!(stage = %VerifyStage::Parsing, "decoding public key");
    let pk = unpack_public_key::<P>(public_key).map_err(|e| reject(VerifyStage::Parsing, e))?;
    let tr = hash_public_key(public_key).map_err(|e| reject(VerifyStage::Parsing, e))?;

    verify_prepared(&pk, &tr, message, signature)
}

/// Verification against an already decoded key and its hash `tr`.
///
/// Callers must have entered a span; this only emits events.
pub(crate) fn verify_prepared<P: DilithiumSchemeParams>(
    pk: &PublicKeyParts<P>,
    tr: &[u8; TR_BYTES],
    message: &[u8],
    signature: &[u8],
) -> Result<()> {
    trace!(stage = %VerifyStage::Parsing, "decoding signature");
    let sig = unpack_signature::<P>(signature).map_err(|e| reject(VerifyStage::Parsing, e))?;

    trace!(stage = %VerifyStage::BoundChecking, "entering stage");
    if !check_norm_polyvec_l(&sig.z, P::GAMMA1_PARAM - P::BETA_PARAM) {
        return Err(reject(
            VerifyStage::BoundChecking,
            Error::Verification {
                algorithm: P::NAME,
                stage: VerifyStage::BoundChecking,
            },
        ));
    }

    trace!(stage = %VerifyStage::MatrixRecompute, "entering stage");
    let w_approx =
        recompute_w_approx(pk, &sig).map_err(|e| reject(VerifyStage::MatrixRecompute, e))?;

    trace!(stage = %VerifyStage::HintReconstruct, "entering stage");
    let w1 = use_hint_polyveck(&sig.hints, &w_approx);

    trace!(stage = %VerifyStage::ChallengeRecompute, "entering stage");
    let c_tilde_prime = recompute_challenge::<P>(tr, message, &w1)
        .map_err(|e| reject(VerifyStage::ChallengeRecompute, e))?;

    trace!(stage = %VerifyStage::Decision, "entering stage");
    if bool::from(c_tilde_prime.ct_eq(&sig.c_tilde)) {
        trace!("signature accepted");
        Ok(())
    } else {
        Err(reject(
            VerifyStage::Decision,
            Error::Verification {
                algorithm: P::NAME,
                stage: VerifyStage::Decision,
            },
        ))
    }
}

/// w' = NTT⁻¹(Â·NTT(z) - NTT(c)·NTT(t1·2^d))
fn recompute_w_approx<P: DilithiumSchemeParams>(
    pk: &PublicKeyParts<P>,
    sig: &SignatureParts<P>,
) -> Result<PolyVecK<P>> {
    let a_hat = expand_matrix_a::<P>(&pk.rho)?;

    let mut c_hat = sample_in_ball::<P>(&sig.c_tilde)?;
    c_hat.ntt_inplace();

    let mut z_hat = sig.z.clone();
    z_hat.ntt_inplace();
    let az = matrix_polyvecl_mul(&a_hat, &z_hat);

    let mut t1_hat = pk.t1.shift_left(P::D_PARAM);
    t1_hat.ntt_inplace();
    let ct1 = t1_hat.poly_mul_elementwise(&c_hat);

    let mut w = az.sub(&ct1);
    w.inv_ntt_inplace();
    Ok(w)
}

/// c̃' = SHAKE256(mu || w1), with mu = SHAKE256(tr || M)
fn recompute_challenge<P: DilithiumSchemeParams>(
    tr: &[u8; TR_BYTES],
    message: &[u8],
    w1: &PolyVecK<P>,
) -> Result<[u8; C_TILDE_BYTES]> {
    let mut mu = [0u8; MU_BYTES];
    ShakeXof256::digest_into(&[tr.as_slice(), message], &mut mu)?;

    let w1_packed = pack_polyveck_w1(w1)?;
    let mut c_tilde = [0u8; C_TILDE_BYTES];
    ShakeXof256::digest_into(&[mu.as_slice(), w1_packed.as_slice()], &mut c_tilde)?;
    Ok(c_tilde)
}
