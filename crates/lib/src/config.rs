//! Environment-provided defaults.
//!
//! Flags given on the command line take precedence; these functions supply
//! the value when a flag is absent.

use std::path::PathBuf;

use crate::consts::{DEFAULT_PLATFORM_ENV, DEFAULT_ROOT, DEFAULT_TOOLCHAIN, PLATFORM_ENV_ENV, ROOT_ENV, TOOLCHAIN_ENV};

fn non_empty_var(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the modules root, from `MODBIN_ROOT` or `modules`
pub fn modules_root() -> PathBuf {
  non_empty_var(ROOT_ENV)
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
}

/// Returns the compiler program, from `MODBIN_TOOLCHAIN` or `go`
pub fn toolchain_program() -> String {
  non_empty_var(TOOLCHAIN_ENV).unwrap_or_else(|| DEFAULT_TOOLCHAIN.to_string())
}

/// Returns the variable used to pass the platform, from `MODBIN_PLATFORM_ENV` or `GOOS`
pub fn platform_env() -> String {
  non_empty_var(PLATFORM_ENV_ENV).unwrap_or_else(|| DEFAULT_PLATFORM_ENV.to_string())
}
