//! Polynomial vector types and operations specific to Dilithium.

use core::marker::PhantomData;

use dverify_algorithms::poly::params::DilithiumParams;
use dverify_algorithms::poly::polynomial::Polynomial;
use dverify_params::pqc::dilithium::DilithiumSchemeParams;

/// Polynomial over Z_q[X]/(X^256 + 1) with the Dilithium modulus
pub type Poly = Polynomial<DilithiumParams>;

/// A vector of polynomials for dimension L (columns in matrix A)
#[derive(Debug)]
pub struct PolyVecL<P: DilithiumSchemeParams> {
    pub(crate) polys: Vec<Poly>,
    _params: PhantomData<P>,
}

/// A vector of polynomials for dimension K (rows in matrix A)
#[derive(Debug)]
pub struct PolyVecK<P: DilithiumSchemeParams> {
    pub(crate) polys: Vec<Poly>,
    _params: PhantomData<P>,
}

// Implement Clone and PartialEq manually to avoid trait bounds on the marker
impl<P: DilithiumSchemeParams> Clone for PolyVecL<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: DilithiumSchemeParams> Clone for PolyVecK<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: DilithiumSchemeParams> PartialEq for PolyVecL<P> {
    fn eq(&self, other: &Self) -> bool {
        self.polys == other.polys
    }
}

impl<P: DilithiumSchemeParams> Eq for PolyVecL<P> {}

impl<P: DilithiumSchemeParams> PartialEq for PolyVecK<P> {
    fn eq(&self, other: &Self) -> bool {
        self.polys == other.polys
    }
}

impl<P: DilithiumSchemeParams> Eq for PolyVecK<P> {}

impl<P: DilithiumSchemeParams> PolyVecL<P> {
    /// Creates a new PolyVecL with all polynomial coefficients set to zero.
    pub fn zero() -> Self {
        Self {
            polys: vec![Poly::zero(); P::L_DIM],
            _params: PhantomData,
        }
    }

    /// Read-only view of the polynomials
    pub fn polys(&self) -> &[Poly] {
        &self.polys
    }

    /// Applies the forward NTT to each polynomial in the vector in-place.
    pub fn ntt_inplace(&mut self) {
        for p in self.polys.iter_mut() {
            p.ntt_inplace();
        }
    }

    /// Computes `sum_i self[i] ⊙ other[i]`.
    /// Both inputs must be in NTT domain; the result is also in NTT domain.
    pub fn pointwise_dot_product(&self, other: &PolyVecL<P>) -> Poly {
        let mut acc = Poly::zero();
        for (a, b) in self.polys.iter().zip(&other.polys) {
            acc.ntt_mul_acc(a, b);
        }
        acc
    }
}

impl<P: DilithiumSchemeParams> PolyVecK<P> {
    /// Creates a new PolyVecK with all polynomial coefficients set to zero.
    pub fn zero() -> Self {
        Self {
            polys: vec![Poly::zero(); P::K_DIM],
            _params: PhantomData,
        }
    }

    /// Read-only view of the polynomials
    pub fn polys(&self) -> &[Poly] {
        &self.polys
    }

    /// Applies the forward NTT to each polynomial in the vector in-place.
    pub fn ntt_inplace(&mut self) {
        for p in self.polys.iter_mut() {
            p.ntt_inplace();
        }
    }

    /// Applies the inverse NTT to each polynomial in the vector in-place.
    pub fn inv_ntt_inplace(&mut self) {
        for p in self.polys.iter_mut() {
            p.from_ntt_inplace();
        }
    }

    /// Subtracts another PolyVec from this one element-wise: `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        let mut res = Self::zero();
        for ((r, a), b) in res.polys.iter_mut().zip(&self.polys).zip(&other.polys) {
            *r = Poly::sub(a, b);
        }
        res
    }

    /// Multiplies every coefficient by 2^d.
    pub fn shift_left(&self, d: u32) -> Self {
        let mut res = Self::zero();
        for (r, a) in res.polys.iter_mut().zip(&self.polys) {
            *r = a.shift_left(d);
        }
        res
    }

    /// Multiplies each polynomial in this PolyVec by a single polynomial.
    /// Assumes both are in NTT domain.
    pub fn poly_mul_elementwise(&self, poly_ntt: &Poly) -> Self {
        let mut res = Self::zero();
        for (r, a) in res.polys.iter_mut().zip(&self.polys) {
            *r = a.ntt_mul(poly_ntt);
        }
        res
    }
}

/// Matrix-vector multiplication: A_hat * vec_l
/// where A_hat is a K×L matrix of polynomials in NTT domain
/// and vec_l is an L-vector of polynomials in NTT domain.
/// Result is a K-vector of polynomials in NTT domain.
pub fn matrix_polyvecl_mul<P: DilithiumSchemeParams>(
    matrix_a_hat: &[PolyVecL<P>],
    vector_l_hat: &PolyVecL<P>,
) -> PolyVecK<P> {
    let mut result = PolyVecK::<P>::zero();
    for (r, row) in result.polys.iter_mut().zip(matrix_a_hat) {
        *r = row.pointwise_dot_product(vector_l_hat);
    }
    result
}
