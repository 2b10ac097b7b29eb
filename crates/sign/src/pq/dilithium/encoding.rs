//! Serialization of public keys, signatures and w1.
//!
//! Layouts (all bit packing is least-significant bit first):
//! - public key: `rho (32) || K × t1 (10 bits per coefficient)`
//! - signature: `c_tilde (32) || L × z (Z_BITS per coefficient) || hints (ω + K)`
//!
//! z is stored as `γ1 - z`. The hint section lists the set positions of every
//! row in increasing order, followed by one byte per row holding the running
//! total of positions written so far. Unused index bytes must be zero.

use dverify_algorithms::poly::serialize::{
    CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde,
};
use dverify_params::pqc::dilithium::{
    DilithiumSchemeParams, C_TILDE_BYTES, MAX_K_DIM, MAX_OMEGA, SEED_RHO_BYTES, T1_BITS,
    T1_POLY_BYTES,
};

use super::polyvec::{Poly, PolyVecK, PolyVecL};
use crate::error::{Error as SignError, Result};

/// Decoded public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyParts<P: DilithiumSchemeParams> {
    /// Seed of the matrix A
    pub rho: [u8; SEED_RHO_BYTES],
    /// High-order bits of t, coefficients in [0, 2^10)
    pub t1: PolyVecK<P>,
}

/// Decoded signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParts<P: DilithiumSchemeParams> {
    /// Challenge seed
    pub c_tilde: [u8; C_TILDE_BYTES],
    /// Response vector, centered coefficients in (-γ1, γ1]
    pub z: PolyVecL<P>,
    /// Positions of the set hint bits
    pub hints: HintVector,
}

/// Fixed-capacity arena of hint positions
///
/// Row `i` owns `indices[start..row_ends[i]]`, where `start` is the end of
/// the previous row (0 for the first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintVector {
    indices: [u8; MAX_OMEGA],
    row_ends: [u8; MAX_K_DIM],
    rows: usize,
}

impl HintVector {
    /// Creates an arena with `rows` empty rows
    pub fn new(rows: usize) -> Result<Self> {
        if rows > MAX_K_DIM {
            return Err(SignError::Internal(format!(
                "hint vector supports at most {} rows, got {}",
                MAX_K_DIM, rows
            )));
        }
        Ok(Self {
            indices: [0; MAX_OMEGA],
            row_ends: [0; MAX_K_DIM],
            rows,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of set positions
    pub fn count(&self) -> usize {
        match self.rows {
            0 => 0,
            n => self.row_ends[n - 1] as usize,
        }
    }

    /// Set positions of row `i`, empty when `i` is out of range
    pub fn row(&self, i: usize) -> &[u8] {
        if i >= self.rows {
            return &[];
        }
        let start = if i == 0 { 0 } else { self.row_ends[i - 1] as usize };
        let end = self.row_ends[i] as usize;
        self.indices.get(start..end).unwrap_or(&[])
    }

    /// Writes the positions of row `i`; every later row is reset to empty.
    ///
    /// Positions must be strictly increasing.
    pub fn set_row(&mut self, i: usize, positions: &[u8]) -> Result<()> {
        if i >= self.rows {
            return Err(SignError::Internal(format!("hint row {} out of range", i)));
        }
        if positions.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SignError::Internal(
                "hint positions must be strictly increasing".into(),
            ));
        }

        let start = if i == 0 { 0 } else { self.row_ends[i - 1] as usize };
        let end = start + positions.len();
        if end > MAX_OMEGA {
            return Err(SignError::Internal(format!(
                "{} hint positions exceed capacity {}",
                end, MAX_OMEGA
            )));
        }

        self.indices[start..end].copy_from_slice(positions);
        // slots past the last row stay zero, as decoding leaves them
        self.indices[end..].fill(0);
        for e in &mut self.row_ends[i..self.rows] {
            *e = end as u8;
        }
        Ok(())
    }
}

/// Packs public key (ρ, t1).
pub fn pack_public_key<P: DilithiumSchemeParams>(parts: &PublicKeyParts<P>) -> Result<Vec<u8>> {
    let mut pk = vec![0u8; P::PUBLIC_KEY_BYTES];
    let (rho, t1_bytes) = pk.split_at_mut(SEED_RHO_BYTES);
    rho.copy_from_slice(&parts.rho);

    for (poly, out) in parts.t1.polys.iter().zip(t1_bytes.chunks_exact_mut(T1_POLY_BYTES)) {
        if poly.coeffs.iter().any(|&c| c >> T1_BITS != 0) {
            return Err(SignError::Encoding {
                algorithm: P::NAME,
                details: "t1 coefficient exceeds 10 bits",
            });
        }
        DefaultCoefficientSerde::pack_coeffs(poly, T1_BITS, out)?;
    }

    Ok(pk)
}

/// Unpacks public key from bytes.
pub fn unpack_public_key<P: DilithiumSchemeParams>(pk: &[u8]) -> Result<PublicKeyParts<P>> {
    if pk.len() != P::PUBLIC_KEY_BYTES {
        return Err(SignError::InvalidKeySize {
            algorithm: P::NAME,
            expected: P::PUBLIC_KEY_BYTES,
            actual: pk.len(),
        });
    }

    let (rho_bytes, t1_bytes) = pk.split_at(SEED_RHO_BYTES);
    let mut rho = [0u8; SEED_RHO_BYTES];
    rho.copy_from_slice(rho_bytes);

    let mut t1 = PolyVecK::<P>::zero();
    for (poly, chunk) in t1.polys.iter_mut().zip(t1_bytes.chunks_exact(T1_POLY_BYTES)) {
        *poly = DefaultCoefficientSerde::unpack_coeffs(chunk, T1_BITS)?;
    }

    Ok(PublicKeyParts { rho, t1 })
}

/// Packs signature (c̃, z, h).
pub fn pack_signature<P: DilithiumSchemeParams>(parts: &SignatureParts<P>) -> Result<Vec<u8>> {
    let mut sig = vec![0u8; P::SIGNATURE_SIZE];
    let (c_tilde, rest) = sig.split_at_mut(C_TILDE_BYTES);
    let (z_bytes, hint_bytes) = rest.split_at_mut(P::L_DIM * P::Z_POLY_BYTES);
    c_tilde.copy_from_slice(&parts.c_tilde);

    let gamma1 = P::GAMMA1_PARAM as i32;
    for (poly, out) in parts.z.polys.iter().zip(z_bytes.chunks_exact_mut(P::Z_POLY_BYTES)) {
        let mut raw = Poly::zero();
        for (r, &c) in raw.coeffs.iter_mut().zip(&poly.coeffs) {
            let v = Poly::centered(c);
            if v <= -gamma1 || v > gamma1 {
                return Err(SignError::Encoding {
                    algorithm: P::NAME,
                    details: "z coefficient outside (-gamma1, gamma1]",
                });
            }
            *r = (gamma1 - v) as u32;
        }
        DefaultCoefficientSerde::pack_coeffs(&raw, P::Z_BITS, out)?;
    }

    pack_hints::<P>(&parts.hints, hint_bytes)?;
    Ok(sig)
}

fn pack_hints<P: DilithiumSchemeParams>(hints: &HintVector, out: &mut [u8]) -> Result<()> {
    if hints.rows() != P::K_DIM || hints.count() > P::OMEGA_PARAM {
        return Err(SignError::Encoding {
            algorithm: P::NAME,
            details: "hint vector does not fit the parameter set",
        });
    }

    let (index_bytes, end_bytes) = out.split_at_mut(P::OMEGA_PARAM);
    index_bytes.fill(0);
    let mut k = 0usize;
    for (i, end) in end_bytes.iter_mut().enumerate() {
        let row = hints.row(i);
        index_bytes[k..k + row.len()].copy_from_slice(row);
        k += row.len();
        *end = k as u8;
    }
    Ok(())
}

/// Unpacks signature from bytes.
///
/// Every structural check happens here, before any polynomial arithmetic.
pub fn unpack_signature<P: DilithiumSchemeParams>(sig: &[u8]) -> Result<SignatureParts<P>> {
    if sig.len() != P::SIGNATURE_SIZE {
        return Err(SignError::InvalidSignatureSize {
            algorithm: P::NAME,
            expected: P::SIGNATURE_SIZE,
            actual: sig.len(),
        });
    }

    let (c_tilde_bytes, rest) = sig.split_at(C_TILDE_BYTES);
    let (z_bytes, hint_bytes) = rest.split_at(P::L_DIM * P::Z_POLY_BYTES);

    let mut c_tilde = [0u8; C_TILDE_BYTES];
    c_tilde.copy_from_slice(c_tilde_bytes);

    // raw < 2γ1, so γ1 - raw always lands in (-γ1, γ1]
    let gamma1 = P::GAMMA1_PARAM as i32;
    let mut z = PolyVecL::<P>::zero();
    for (poly, chunk) in z.polys.iter_mut().zip(z_bytes.chunks_exact(P::Z_POLY_BYTES)) {
        let raw: Poly = DefaultCoefficientSerde::unpack_coeffs(chunk, P::Z_BITS)?;
        for (c, &r) in poly.coeffs.iter_mut().zip(&raw.coeffs) {
            *c = Poly::from_centered(gamma1 - r as i32);
        }
    }

    let hints = unpack_hints::<P>(hint_bytes)?;
    Ok(SignatureParts { c_tilde, z, hints })
}

fn unpack_hints<P: DilithiumSchemeParams>(bytes: &[u8]) -> Result<HintVector> {
    let malformed = |details: &'static str| SignError::Deserialization {
        algorithm: P::NAME,
        details,
    };

    let (index_bytes, end_bytes) = bytes.split_at(P::OMEGA_PARAM);
    let mut hints = HintVector::new(P::K_DIM)?;

    let mut k = 0usize;
    for (i, &end) in end_bytes.iter().enumerate() {
        let end = end as usize;
        if end < k || end > P::OMEGA_PARAM {
            return Err(malformed("hint offsets decrease or exceed omega"));
        }
        if index_bytes[k..end].windows(2).any(|w| w[0] >= w[1]) {
            return Err(malformed("hint indices not strictly increasing"));
        }
        hints.indices[k..end].copy_from_slice(&index_bytes[k..end]);
        hints.row_ends[i] = end as u8;
        k = end;
    }

    if index_bytes[k..].iter().any(|&b| b != 0) {
        return Err(malformed("non-zero hint padding"));
    }

    Ok(hints)
}

/// Packs w1 for computing the challenge hash, W1_BITS per coefficient.
pub fn pack_polyveck_w1<P: DilithiumSchemeParams>(w1: &PolyVecK<P>) -> Result<Vec<u8>> {
    let mut out = vec![0u8; P::K_DIM * P::W1_POLY_BYTES];
    for (poly, chunk) in w1.polys.iter().zip(out.chunks_exact_mut(P::W1_POLY_BYTES)) {
        DefaultCoefficientSerde::pack_coeffs(poly, P::W1_BITS, chunk)?;
    }
    Ok(out)
}
