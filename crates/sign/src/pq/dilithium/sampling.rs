//! Deterministic expansion of the matrix A and the challenge polynomial c.

use dverify_algorithms::xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};
use dverify_params::pqc::dilithium::{
    DilithiumSchemeParams, C_TILDE_BYTES, DILITHIUM_N, DILITHIUM_Q, SEED_RHO_BYTES,
};
use dverify_params::utils::hash::{SHAKE128_RATE, SHAKE256_RATE};

use super::polyvec::{Poly, PolyVecL};
use crate::error::Result;

/// Samples one polynomial of A from SHAKE128(rho || j || i).
///
/// Each 3-byte little-endian chunk, masked to 23 bits, is a candidate;
/// candidates ≥ q are discarded. The output is taken as already being in the
/// NTT domain.
fn sample_uniform_poly(rho: &[u8; SEED_RHO_BYTES], i: usize, j: usize) -> Result<Poly> {
    let mut xof = ShakeXof128::new();
    xof.update(rho)?;
    xof.update(&[j as u8, i as u8])?;

    let mut poly = Poly::zero();
    let mut ctr = 0usize;
    // one rate-sized block holds a whole number of 3-byte candidates
    let mut buf = [0u8; SHAKE128_RATE];

    while ctr < DILITHIUM_N {
        xof.squeeze(&mut buf)?;
        for chunk in buf.chunks_exact(3) {
            if ctr == DILITHIUM_N {
                break;
            }
            let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], 0]) & 0x7F_FFFF;
            if t < DILITHIUM_Q {
                poly.coeffs[ctr] = t;
                ctr += 1;
            }
        }
    }

    Ok(poly)
}

/// Expands a seed `rho` into the matrix Â (K_DIM rows, L_DIM columns) in
/// the NTT domain.
pub fn expand_matrix_a<P: DilithiumSchemeParams>(
    rho: &[u8; SEED_RHO_BYTES],
) -> Result<Vec<PolyVecL<P>>> {
    let mut matrix_a = Vec::with_capacity(P::K_DIM);

    for i in 0..P::K_DIM {
        let mut row = PolyVecL::<P>::zero();
        for (j, poly) in row.polys.iter_mut().enumerate() {
            *poly = sample_uniform_poly(rho, i, j)?;
        }
        matrix_a.push(row);
    }

    Ok(matrix_a)
}

/// Samples the challenge polynomial c with exactly τ coefficients in {+1, -1}.
///
/// Uses SHAKE256(c_tilde) as randomness source: the first 8 bytes are the
/// sign bits, then for `i` in `N-τ..N` a byte `b ≤ i` is drawn by rejection,
/// `c[i] = c[b]` and `c[b] = ±1`.
pub fn sample_in_ball<P: DilithiumSchemeParams>(c_tilde: &[u8; C_TILDE_BYTES]) -> Result<Poly> {
    let mut xof = ShakeXof256::new();
    xof.update(c_tilde)?;

    let mut buf = [0u8; SHAKE256_RATE];
    xof.squeeze(&mut buf)?;

    let mut sign_bytes = [0u8; 8];
    sign_bytes.copy_from_slice(&buf[..8]);
    let mut signs = u64::from_le_bytes(sign_bytes);
    let mut pos = 8usize;

    let mut c = Poly::zero();
    for i in (DILITHIUM_N - P::TAU_PARAM)..DILITHIUM_N {
        let b = loop {
            if pos == buf.len() {
                xof.squeeze(&mut buf)?;
                pos = 0;
            }
            let b = buf[pos] as usize;
            pos += 1;
            if b <= i {
                break b;
            }
        };

        c.coeffs[i] = c.coeffs[b];
        c.coeffs[b] = Poly::from_centered(1 - 2 * (signs & 1) as i32);
        signs >>= 1;
    }

    Ok(c)
}
