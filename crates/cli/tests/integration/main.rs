//! CLI integration tests driving `modbin` against a fake compiler.

mod common;

#[cfg(unix)]
mod plan_tests;
