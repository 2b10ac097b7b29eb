//! serialize.rs - Polynomial coefficient packing and unpacking
//!
//! Coefficients are packed least-significant bit first: coefficient `i`
//! occupies bits `[i·w, (i+1)·w)` of the little-endian byte string.

use super::params::{Modulus, N};
use super::polynomial::Polynomial;
use crate::error::{validate, Result};

/// Number of bytes needed to pack `N` coefficients of `bits_per_coeff` bits
pub const fn packed_len(bits_per_coeff: usize) -> usize {
    (N * bits_per_coeff).div_ceil(8)
}

/// Trait for packing polynomial coefficients into a byte array
pub trait CoefficientPacker<M: Modulus> {
    /// Packs the low `bits_per_coeff` bits of every coefficient into `out`
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize, out: &mut [u8]) -> Result<()>;
}

/// Trait for unpacking polynomial coefficients from a byte array
pub trait CoefficientUnpacker<M: Modulus> {
    /// Unpacks coefficients from `bytes` into a new polynomial
    ///
    /// Fails if any unpacked value is not reduced modulo Q.
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

fn check_width(bits_per_coeff: usize) -> Result<()> {
    validate::parameter(
        (1..=32).contains(&bits_per_coeff),
        "bits_per_coeff",
        "must be in range [1, 32]",
    )
}

impl<M: Modulus> CoefficientPacker<M> for DefaultCoefficientSerde {
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize, out: &mut [u8]) -> Result<()> {
        check_width(bits_per_coeff)?;
        validate::length("coefficient packing", out.len(), packed_len(bits_per_coeff))?;

        let mask = (1u64 << bits_per_coeff) - 1;
        let mut acc = 0u64;
        let mut acc_bits = 0usize;
        let mut pos = 0usize;

        for &coeff in poly.as_coeffs_slice() {
            acc |= (coeff as u64 & mask) << acc_bits;
            acc_bits += bits_per_coeff;
            while acc_bits >= 8 {
                out[pos] = acc as u8;
                pos += 1;
                acc >>= 8;
                acc_bits -= 8;
            }
        }
        if acc_bits > 0 {
            out[pos] = acc as u8;
        }

        Ok(())
    }
}

impl<M: Modulus> CoefficientUnpacker<M> for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>> {
        check_width(bits_per_coeff)?;
        validate::length("coefficient unpacking", bytes.len(), packed_len(bits_per_coeff))?;

        let mask = (1u64 << bits_per_coeff) - 1;
        let mut poly = Polynomial::<M>::zero();
        let mut acc = 0u64;
        let mut acc_bits = 0usize;
        let mut input = bytes.iter();
        let mut overflow = false;

        for coeff in poly.as_mut_coeffs_slice() {
            while acc_bits < bits_per_coeff {
                // length was validated above, the iterator cannot run dry
                let byte = input.next().copied().unwrap_or(0);
                acc |= (byte as u64) << acc_bits;
                acc_bits += 8;
            }
            let value = (acc & mask) as u32;
            overflow |= value >= M::Q;
            *coeff = value;
            acc >>= bits_per_coeff;
            acc_bits -= bits_per_coeff;
        }

        validate::parameter(!overflow, "packed coefficients", "value exceeds modulus Q")?;
        Ok(poly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::params::DilithiumParams;

    type Poly = Polynomial<DilithiumParams>;

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(10), 320);
        assert_eq!(packed_len(18), 576);
        assert_eq!(packed_len(20), 640);
        assert_eq!(packed_len(6), 192);
        assert_eq!(packed_len(4), 128);
    }

    #[test]
    fn test_pack_is_lsb_first() {
        let mut poly = Poly::zero();
        poly.coeffs[..4].copy_from_slice(&[1, 2, 3, 4]);
        let mut out = [0u8; 320];
        DefaultCoefficientSerde::pack_coeffs(&poly, 10, &mut out).unwrap();
        assert_eq!(&out[..5], &[1, 8, 48, 0, 1]);
        assert!(out[5..].iter().all(|&b| b == 0));

        let back: Poly = DefaultCoefficientSerde::unpack_coeffs(&out, 10).unwrap();
        assert_eq!(back, poly);
    }

    #[test]
    fn test_unpack_straddling_bytes() {
        let mut bytes = [0u8; 576];
        bytes[..9].copy_from_slice(&[255, 255, 3, 0, 80, 52, 82, 0, 0]);
        let poly: Poly = DefaultCoefficientSerde::unpack_coeffs(&bytes, 18).unwrap();
        assert_eq!(&poly.coeffs[..4], &[0x3FFFF, 0, 0x12345, 1]);
    }

    #[test]
    fn test_invalid_widths_and_lengths() {
        let poly = Poly::zero();
        let mut out = [0u8; 320];
        assert!(DefaultCoefficientSerde::pack_coeffs(&poly, 0, &mut out).is_err());
        assert!(DefaultCoefficientSerde::pack_coeffs(&poly, 33, &mut out).is_err());
        assert!(DefaultCoefficientSerde::pack_coeffs(&poly, 11, &mut out).is_err());

        let r: Result<Poly> = DefaultCoefficientSerde::unpack_coeffs(&out[..319], 10);
        assert!(r.is_err());
    }

    #[test]
    fn test_unpack_rejects_unreduced_values() {
        // 23-bit all-ones exceeds q
        let bytes = [0xFFu8; 736];
        let r: Result<Poly> = DefaultCoefficientSerde::unpack_coeffs(&bytes, 23);
        assert!(r.is_err());
    }
}
