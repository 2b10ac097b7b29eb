//! SHAKE extendable output functions (FIPS PUB 202)
//!
//! The Keccak permutation itself comes from the `sha3` crate; these types
//! only add the absorb-then-squeeze state machine used across the workspace.

use sha3::digest::{ExtendableOutput, Update, XofReader};

use super::ExtendableOutputFunction;
use crate::error::{validate, Error, Result};

macro_rules! shake_xof {
    ($name:ident, $inner:ty, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            hasher: Option<$inner>,
            reader: Option<<$inner as ExtendableOutput>::Reader>,
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    hasher: Some(<$inner>::default()),
                    reader: None,
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                match self.hasher.as_mut() {
                    Some(hasher) => {
                        hasher.update(data);
                        Ok(())
                    }
                    None => Err(Error::xof_squeezing()),
                }
            }

            fn finalize(&mut self) -> Result<()> {
                if let Some(hasher) = self.hasher.take() {
                    self.reader = Some(hasher.finalize_xof());
                }
                Ok(())
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                validate::parameter(
                    !output.is_empty(),
                    "output_length",
                    "Output buffer must not be empty",
                )?;

                self.finalize()?;
                match self.reader.as_mut() {
                    Some(reader) => {
                        reader.read(output);
                        Ok(())
                    }
                    None => Err(Error::Processing {
                        operation: stringify!($name),
                        details: "reader missing after finalization",
                    }),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as ExtendableOutputFunction>::new()
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("squeezing", &self.reader.is_some())
                    .finish()
            }
        }
    };
}

shake_xof!(ShakeXof128, sha3::Shake128, "SHAKE-128 extendable output function");
shake_xof!(ShakeXof256, sha3::Shake256, "SHAKE-256 extendable output function");
