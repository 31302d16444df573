//! Shared utilities.
//!
//! Common helpers used across the crate, currently only test support.

#[cfg(test)]
pub mod testutil;
