//! Build orchestration.
//!
//! A sweep discovers every module under the root, evaluates the artifact for
//! each selected platform, and invokes the toolchain for artifacts that are
//! missing (or all of them when forced).
//!
//! # Characteristics
//!
//! - **Sequential**: modules in discovery order, platforms in canonical order
//! - **Existence-based**: an artifact is up to date if its file exists
//! - **Fail-fast**: the first failure aborts the rest of the sweep
//!
//! # Submodules
//!
//! - [`execute`] - decision policy, planning and the sweep itself

pub mod execute;
mod types;

pub use execute::{decide, evaluate, execute_build, plan, run_sweep};
pub use types::*;
