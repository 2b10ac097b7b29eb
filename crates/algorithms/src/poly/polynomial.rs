//! polynomial.rs - Polynomials over R_Q = Z_Q[X]/(X^256 + 1)

use core::marker::PhantomData;
use core::ops::{Add, Neg, Sub};

use super::params::{Modulus, N};
use crate::error::{validate, Result};

/// A polynomial in a ring R_Q = Z_Q[X]/(X^N + 1)
///
/// Coefficients are always kept in canonical form `[0, Q)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<M: Modulus> {
    /// Coefficients of the polynomial, stored in standard representation
    pub coeffs: [u32; N],
    _marker: PhantomData<M>,
}

impl<M: Modulus> Default for Polynomial<M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<M: Modulus> Polynomial<M> {
    /// Creates a new polynomial with all coefficients set to zero
    pub const fn zero() -> Self {
        Self {
            coeffs: [0; N],
            _marker: PhantomData,
        }
    }

    /// Creates a polynomial from a slice of canonical coefficients
    pub fn from_coeffs(coeffs_slice: &[u32]) -> Result<Self> {
        validate::length("polynomial coefficients", coeffs_slice.len(), N)?;
        validate::parameter(
            coeffs_slice.iter().all(|&c| c < M::Q),
            "coeffs_slice",
            "coefficient not reduced modulo Q",
        )?;

        let mut poly = Self::zero();
        poly.coeffs.copy_from_slice(coeffs_slice);
        Ok(poly)
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[u32] {
        &self.coeffs
    }

    /// Returns a mutable slice view of the coefficients
    pub fn as_mut_coeffs_slice(&mut self) -> &mut [u32] {
        &mut self.coeffs
    }

    /// Branch-free reduction of a value in `[0, 2Q)`
    #[inline(always)]
    pub(crate) fn reduce_once(a: u32) -> u32 {
        let t = a.wrapping_sub(M::Q);
        // mask is all ones when the subtraction borrowed
        let mask = 0u32.wrapping_sub(t >> 31);
        t.wrapping_add(M::Q & mask)
    }

    /// Maps a canonical coefficient to its centered representative in (-Q/2, Q/2]
    #[inline(always)]
    pub fn centered(a: u32) -> i32 {
        let a = a as i32;
        let half = ((M::Q - 1) / 2) as i32;
        // subtract Q when a > (Q-1)/2
        a - ((half.wrapping_sub(a) >> 31) & M::Q as i32)
    }

    /// Maps a signed value in (-Q, Q) back to canonical form
    #[inline(always)]
    pub fn from_centered(a: i32) -> u32 {
        (a + ((a >> 31) & M::Q as i32)) as u32
    }

    /// Polynomial addition modulo Q
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = Self::reduce_once(a + b);
        }
        result
    }

    /// Polynomial subtraction modulo Q
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for ((r, &a), &b) in result.coeffs.iter_mut().zip(&self.coeffs).zip(&other.coeffs) {
            *r = Self::reduce_once(a + M::Q - b);
        }
        result
    }

    /// Polynomial negation modulo Q
    pub fn neg(&self) -> Self {
        let mut result = Self::zero();
        for (r, &a) in result.coeffs.iter_mut().zip(&self.coeffs) {
            // Mask is 0xFFFF_FFFF when coeff ≠ 0, 0 otherwise
            let mask = ((a != 0) as u32).wrapping_neg();
            *r = (M::Q - a) & mask;
        }
        result
    }

    /// Scalar multiplication
    pub fn scalar_mul(&self, scalar: u32) -> Self {
        let mut result = Self::zero();
        let scalar = (scalar % M::Q) as u64;
        for (r, &a) in result.coeffs.iter_mut().zip(&self.coeffs) {
            *r = ((a as u64 * scalar) % M::Q as u64) as u32;
        }
        result
    }

    /// Multiplies every coefficient by 2^d
    pub fn shift_left(&self, d: u32) -> Self {
        self.scalar_mul(1 << d)
    }

    /// Schoolbook polynomial multiplication (for correctness testing)
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        let q = M::Q as u64;
        let mut acc = [0u64; N];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                let prod = (a as u64) * (b as u64) % q;
                let idx = i + j;
                if idx < N {
                    acc[idx] = (acc[idx] + prod) % q;
                } else {
                    // X^N = -1
                    acc[idx - N] = (acc[idx - N] + q - prod) % q;
                }
            }
        }

        let mut result = Self::zero();
        for (r, a) in result.coeffs.iter_mut().zip(acc) {
            *r = a as u32;
        }
        result
    }
}

impl<M: Modulus> Add for Polynomial<M> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(&self, &other)
    }
}

impl<M: Modulus> Add for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl<M: Modulus> Sub for Polynomial<M> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(&self, &other)
    }
}

impl<M: Modulus> Sub for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}

impl<M: Modulus> Neg for Polynomial<M> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl<M: Modulus> Neg for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}
