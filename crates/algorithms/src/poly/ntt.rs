//! ntt.rs - Number Theoretic Transform over Z_Q[X]/(X^256 + 1)
//!
//! Forward transform is Cooley-Tukey (natural order in, bit-reversed out),
//! the inverse is Gentleman-Sande (bit-reversed in, natural order out).
//! Both read their twiddles from the read-only [`NttModulus::ZETAS`] table.
//!
//! ## Montgomery Form Conversions:
//! - Twiddles are stored as ζ·R, so `montgomery_mul(ζ·R, a) = ζ·a`
//! - Coefficients stay in the standard domain before and after every call

use super::params::{NttModulus, N};
use super::polynomial::Polynomial;

/// Trait for forward Number Theoretic Transform
pub trait NttOperator<M: NttModulus> {
    /// Performs the forward NTT on a polynomial
    fn ntt(poly: &mut Polynomial<M>);
}

/// Trait for inverse Number Theoretic Transform
pub trait InverseNttOperator<M: NttModulus> {
    /// Performs the inverse NTT on a polynomial, including the N^-1 scaling
    fn inv_ntt(poly: &mut Polynomial<M>);
}

/// Cooley-Tukey NTT implementation
pub struct CooleyTukeyNtt;

/// Montgomery reduction: computes a * R^-1 mod Q for a < Q * 2^32
#[inline(always)]
pub fn montgomery_reduce<M: NttModulus>(a: u64) -> u32 {
    let q = M::Q as u64;
    let m = (a as u32).wrapping_mul(M::Q_INV_NEG) as u64;
    let t = ((a + m * q) >> 32) as u32;

    // Branch-free conditional subtraction, t < 2Q
    let mask = ((t >= M::Q) as u32).wrapping_neg();
    t.wrapping_sub(M::Q & mask)
}

/// Montgomery multiplication: computes a * b * R^-1 mod Q
#[inline(always)]
pub fn montgomery_mul<M: NttModulus>(a: u32, b: u32) -> u32 {
    montgomery_reduce::<M>((a as u64) * (b as u64))
}

/// Modular addition with constant-time reduction
#[inline(always)]
fn add_mod<M: NttModulus>(a: u32, b: u32) -> u32 {
    Polynomial::<M>::reduce_once(a + b)
}

/// Modular subtraction with constant-time reduction
#[inline(always)]
fn sub_mod<M: NttModulus>(a: u32, b: u32) -> u32 {
    Polynomial::<M>::reduce_once(a + M::Q - b)
}

impl<M: NttModulus> NttOperator<M> for CooleyTukeyNtt {
    fn ntt(poly: &mut Polynomial<M>) {
        let coeffs = poly.as_mut_coeffs_slice();

        let mut k = 0usize;
        let mut len = N >> 1;
        while len > 0 {
            for start in (0..N).step_by(len << 1) {
                k += 1;
                let zeta = M::ZETAS[k];
                for j in start..start + len {
                    let t = montgomery_mul::<M>(zeta, coeffs[j + len]);
                    coeffs[j + len] = sub_mod::<M>(coeffs[j], t);
                    coeffs[j] = add_mod::<M>(coeffs[j], t);
                }
            }
            len >>= 1;
        }
    }
}

impl<M: NttModulus> InverseNttOperator<M> for CooleyTukeyNtt {
    fn inv_ntt(poly: &mut Polynomial<M>) {
        let coeffs = poly.as_mut_coeffs_slice();

        let mut k = N;
        let mut len = 1usize;
        while len < N {
            for start in (0..N).step_by(len << 1) {
                k -= 1;
                // -ζ_k; table entries are never zero
                let zeta = M::Q - M::ZETAS[k];
                for j in start..start + len {
                    let t = coeffs[j];
                    coeffs[j] = add_mod::<M>(t, coeffs[j + len]);
                    coeffs[j + len] = montgomery_mul::<M>(zeta, sub_mod::<M>(t, coeffs[j + len]));
                }
            }
            len <<= 1;
        }

        for c in coeffs.iter_mut() {
            *c = montgomery_mul::<M>(*c, M::N_INV);
        }
    }
}

/// Extension methods for Polynomial to support NTT operations
impl<M: NttModulus> Polynomial<M> {
    /// Convert polynomial to NTT domain in-place
    pub fn ntt_inplace(&mut self) {
        CooleyTukeyNtt::ntt(self)
    }

    /// Convert polynomial from NTT domain in-place
    pub fn from_ntt_inplace(&mut self) {
        CooleyTukeyNtt::inv_ntt(self)
    }

    /// Multiply two polynomials in NTT domain (pointwise multiplication)
    ///
    /// The result is the exact product a·b mod Q of every coefficient pair,
    /// so `from_ntt_inplace` of the result is the ring product.
    pub fn ntt_mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            // (a·b·R^-1)·R²·R^-1 = a·b
            *r = montgomery_mul::<M>(montgomery_mul::<M>(a, b), M::MONT_R2);
        }
        result
    }

    /// Pointwise multiply-accumulate in NTT domain: `self += a ⊙ b`
    pub fn ntt_mul_acc(&mut self, a: &Self, b: &Self) {
        for ((r, &x), &y) in self.coeffs.iter_mut().zip(&a.coeffs).zip(&b.coeffs) {
            let prod = montgomery_mul::<M>(montgomery_mul::<M>(x, y), M::MONT_R2);
            *r = add_mod::<M>(*r, prod);
        }
    }
}
