//! modbin-lib: selective incremental builder for platform-specific module binaries.
//!
//! This crate provides the pieces of a build sweep over a modules tree:
//! - `Module`: a source unit discovered under `root/*/*.<ext>`
//! - `Platform`: the fixed set of operating systems artifacts are built for
//! - `Artifact`: the binary expected for one (module, platform) pair
//! - `Toolchain`: the compiler capability invoked for each artifact
//! - `build`: the orchestrator that decides what to (re)build and drives the toolchain

pub mod artifact;
pub mod build;
pub mod config;
pub mod consts;
pub mod module;
pub mod platform;
pub mod toolchain;
pub mod util;
