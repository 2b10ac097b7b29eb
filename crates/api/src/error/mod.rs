//! Error handling for signature verification

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, Rejected, Result};

#[cfg(test)]
mod tests;
