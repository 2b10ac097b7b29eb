//! Constant values for the dverify workspace
//!
//! Everything here is a compile-time constant; the crate has no dependencies
//! and is always `no_std`.

#![no_std]

pub mod pqc;
pub mod utils;
