//! Constants for the Dilithium signature scheme (round 3.1 parameter sets)

/// Dilithium polynomial degree
pub const DILITHIUM_N: usize = 256;

/// Dilithium modulus q = 2^23 - 2^13 + 1
pub const DILITHIUM_Q: u32 = 8380417;

/// Number of low-order bits dropped from t
pub const DILITHIUM_D: u32 = 13;

/// Bits per packed t1 coefficient (23 - d)
pub const T1_BITS: usize = 10;

/// Packed size of one t1 polynomial
pub const T1_POLY_BYTES: usize = DILITHIUM_N * T1_BITS / 8;

/// Seed size for matrix expansion
pub const SEED_RHO_BYTES: usize = 32;

/// Size of the challenge seed c~ (all round 3.1 levels)
pub const C_TILDE_BYTES: usize = 32;

/// Size of tr = H(pk)
pub const TR_BYTES: usize = 32;

/// Size of mu = H(tr || M)
pub const MU_BYTES: usize = 64;

/// Largest k over all parameter sets
pub const MAX_K_DIM: usize = 8;

/// Largest omega over all parameter sets
pub const MAX_OMEGA: usize = 80;

/// Common trait for Dilithium parameter sets.
///
/// Every level is a zero-sized marker type; all values are associated
/// constants so that the verifier is monomorphised per level.
pub trait DilithiumSchemeParams: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    /// Polynomial degree
    const N: usize = DILITHIUM_N;
    /// Prime modulus
    const Q: u32 = DILITHIUM_Q;
    /// Dropped bits parameter
    const D_PARAM: u32 = DILITHIUM_D;

    /// Rows of A (length of t1 and h)
    const K_DIM: usize;
    /// Columns of A (length of z)
    const L_DIM: usize;

    /// Secret coefficient bound
    const ETA_S1S2: u32;
    /// Range of the masking vector, z lies in (-gamma1, gamma1]
    const GAMMA1_PARAM: u32;
    /// Bits per packed z coefficient
    const Z_BITS: usize;
    /// Low-order rounding range
    const GAMMA2_PARAM: u32;
    /// Signature norm slack
    const BETA_PARAM: u32;
    /// Maximum number of set hint bits
    const OMEGA_PARAM: usize;
    /// Number of non-zero challenge coefficients
    const TAU_PARAM: usize;
    /// Bits per packed w1 coefficient
    const W1_BITS: usize;

    /// Public key size in bytes
    const PUBLIC_KEY_BYTES: usize = SEED_RHO_BYTES + Self::K_DIM * T1_POLY_BYTES;
    /// Signature size in bytes
    const SIGNATURE_SIZE: usize =
        C_TILDE_BYTES + Self::L_DIM * Self::Z_POLY_BYTES + Self::OMEGA_PARAM + Self::K_DIM;

    /// Packed size of one z polynomial
    const Z_POLY_BYTES: usize = DILITHIUM_N * Self::Z_BITS / 8;
    /// Packed size of one w1 polynomial
    const W1_POLY_BYTES: usize = DILITHIUM_N * Self::W1_BITS / 8;
}

/// Dilithium2 (NIST security level 2)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dilithium2Params;

impl DilithiumSchemeParams for Dilithium2Params {
    const NAME: &'static str = "Dilithium2";
    const K_DIM: usize = 4;
    const L_DIM: usize = 4;
    const ETA_S1S2: u32 = 2;
    const GAMMA1_PARAM: u32 = 1 << 17;
    const Z_BITS: usize = 18;
    const GAMMA2_PARAM: u32 = (DILITHIUM_Q - 1) / 88;
    const BETA_PARAM: u32 = 78;
    const OMEGA_PARAM: usize = 80;
    const TAU_PARAM: usize = 39;
    const W1_BITS: usize = 6;
}

/// Dilithium3 (NIST security level 3)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dilithium3Params;

impl DilithiumSchemeParams for Dilithium3Params {
    const NAME: &'static str = "Dilithium3";
    const K_DIM: usize = 6;
    const L_DIM: usize = 5;
    const ETA_S1S2: u32 = 4;
    const GAMMA1_PARAM: u32 = 1 << 19;
    const Z_BITS: usize = 20;
    const GAMMA2_PARAM: u32 = (DILITHIUM_Q - 1) / 32;
    const BETA_PARAM: u32 = 196;
    const OMEGA_PARAM: usize = 55;
    const TAU_PARAM: usize = 49;
    const W1_BITS: usize = 4;
}

/// Dilithium5 (NIST security level 5)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dilithium5Params;

impl DilithiumSchemeParams for Dilithium5Params {
    const NAME: &'static str = "Dilithium5";
    const K_DIM: usize = 8;
    const L_DIM: usize = 7;
    const ETA_S1S2: u32 = 2;
    const GAMMA1_PARAM: u32 = 1 << 19;
    const Z_BITS: usize = 20;
    const GAMMA2_PARAM: u32 = (DILITHIUM_Q - 1) / 32;
    const BETA_PARAM: u32 = 120;
    const OMEGA_PARAM: usize = 75;
    const TAU_PARAM: usize = 60;
    const W1_BITS: usize = 4;
}
