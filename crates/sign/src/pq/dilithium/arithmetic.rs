//! High/low decomposition, hint reconstruction and norm checks.
//!
//! Every function here runs on public data, but the per-coefficient paths are
//! still branch-free: selections go through `subtle` and reductions use
//! arithmetic masks.

use subtle::{Choice, ConditionallySelectable, ConstantTimeLess};

use dverify_params::pqc::dilithium::{DilithiumSchemeParams, DILITHIUM_N, DILITHIUM_Q};

use super::encoding::HintVector;
use super::polyvec::{Poly, PolyVecK, PolyVecL};

const Q: i32 = DILITHIUM_Q as i32;

/// γ2 of the Dilithium2 parameter set
const GAMMA2_88: u32 = (DILITHIUM_Q - 1) / 88;
/// γ2 of the Dilithium3 and Dilithium5 parameter sets
const GAMMA2_32: u32 = (DILITHIUM_Q - 1) / 32;

/// Number of high-order buckets m = (q - 1) / (2·γ2)
#[inline]
pub const fn buckets(gamma2: u32) -> u32 {
    (DILITHIUM_Q - 1) / (2 * gamma2)
}

/// Splits `a ∈ [0, q)` into `(r1, r0)` with `a ≡ r1·2γ2 + r0 (mod q)`.
///
/// `r0` lies in `(-γ2, γ2]` and `r1` in `[0, m)`. The top interval
/// `(q - 1 - γ2, q - 1]` folds into bucket 0 with `r0 = a - q`, so
/// `decompose(q - 1) = (0, -1)`.
///
/// `gamma2` must be `(q-1)/88` or `(q-1)/32`.
#[inline]
pub fn decompose(a: u32, gamma2: u32) -> (u32, i32) {
    debug_assert!(
        gamma2 == GAMMA2_88 || gamma2 == GAMMA2_32,
        "unsupported gamma2 {}",
        gamma2
    );
    let a = a as i32;
    let mut a1 = (a + 127) >> 7;
    if gamma2 == GAMMA2_88 {
        a1 = (a1 * 11275 + (1 << 23)) >> 24;
        // 44 wraps to 0
        a1 ^= ((43 - a1) >> 31) & a1;
    } else {
        a1 = (a1 * 1025 + (1 << 21)) >> 22;
        a1 &= 15;
    }

    let mut a0 = a - a1 * 2 * gamma2 as i32;
    a0 -= (((Q - 1) / 2 - a0) >> 31) & Q;
    (a1 as u32, a0)
}

/// `HighBits`: the bucket index of `r`
#[inline]
pub fn high_bits(r: u32, gamma2: u32) -> u32 {
    decompose(r, gamma2).0
}

/// `UseHint`: recovers the high bits of `r + z` from `r` and a hint bit
///
/// A set hint moves `r1` one bucket up when `r0 > 0` and one bucket down
/// otherwise, both modulo the bucket count.
#[inline]
pub fn use_hint(hint: bool, r: u32, gamma2: u32) -> u32 {
    let m = buckets(gamma2);
    let (r1, r0) = decompose(r, gamma2);

    let up = (r1 + 1) % m;
    let down = (r1 + m - 1) % m;
    // sign bit of -r0 is set exactly when r0 > 0
    let positive = Choice::from(((r0.wrapping_neg() as u32) >> 31) as u8);
    let moved = u32::conditional_select(&down, &up, positive);

    u32::conditional_select(&r1, &moved, Choice::from(hint as u8))
}

/// Applies `UseHint` to every coefficient of `w`, with the set positions of
/// row `i` taken from `hints`.
pub fn use_hint_polyveck<P: DilithiumSchemeParams>(
    hints: &HintVector,
    w: &PolyVecK<P>,
) -> PolyVecK<P> {
    let mut w1 = PolyVecK::<P>::zero();
    for (i, (out, poly)) in w1.polys.iter_mut().zip(&w.polys).enumerate() {
        let mut flags = [false; DILITHIUM_N];
        for &idx in hints.row(i) {
            flags[idx as usize] = true;
        }
        for ((o, &c), &h) in out.coeffs.iter_mut().zip(&poly.coeffs).zip(&flags) {
            *o = use_hint(h, c, P::GAMMA2_PARAM);
        }
    }
    w1
}

/// Returns a set `Choice` when every centered coefficient satisfies `|c| < bound`.
///
/// The whole polynomial is always scanned.
pub fn check_norm_poly(poly: &Poly, bound: u32) -> Choice {
    let mut within = Choice::from(1u8);
    for &c in poly.coeffs.iter() {
        within &= Poly::centered(c).unsigned_abs().ct_lt(&bound);
    }
    within
}

/// Checks that the infinity norm of all polynomials in a PolyVecL is below `bound`.
pub fn check_norm_polyvec_l<P: DilithiumSchemeParams>(pv: &PolyVecL<P>, bound: u32) -> bool {
    let within = pv
        .polys
        .iter()
        .fold(Choice::from(1u8), |acc, p| acc & check_norm_poly(p, bound));
    within.into()
}
