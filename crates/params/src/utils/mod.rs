//! Shared constants for the primitives the schemes are built on

pub mod hash;
