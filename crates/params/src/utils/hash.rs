//! Constants for the Keccak-based extendable-output functions

/// Rate of SHAKE-128 in bytes (one squeezed block)
pub const SHAKE128_RATE: usize = 168;

/// Rate of SHAKE-256 in bytes (one squeezed block)
pub const SHAKE256_RATE: usize = 136;
