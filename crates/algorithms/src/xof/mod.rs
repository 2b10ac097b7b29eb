//! Extendable Output Functions (XOF)
//!
//! Absorb/squeeze wrappers around the SHAKE functions of the `sha3` crate.
//! A XOF absorbs input through [`update`](ExtendableOutputFunction::update)
//! until the first squeeze, after which only further squeezing is allowed.

use crate::error::{Error, Result};

pub mod shake;

pub use shake::{ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Updates the XOF state with new data
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the XOF state for output
    fn finalize(&mut self) -> Result<()>;

    /// Squeezes output bytes into the provided buffer
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Absorbs every part of `inputs` in order and fills `output`
    fn digest_into(inputs: &[&[u8]], output: &mut [u8]) -> Result<()>
    where
        Self: Sized,
    {
        let mut xof = Self::new();
        for input in inputs {
            xof.update(input)?;
        }
        xof.squeeze(output)
    }
}

// Error conversion helpers for XOF-specific errors
impl Error {
    /// Create an XOF squeezing error
    pub(crate) fn xof_squeezing() -> Self {
        Error::Processing {
            operation: "XOF",
            details: "Cannot update after squeezing has begun",
        }
    }
}
