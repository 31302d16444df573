//! Types for planning and running a build sweep.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::artifact::{Artifact, NamingMode};
use crate::config;
use crate::consts::DEFAULT_EXTENSION;
use crate::module::DiscoveryError;
use crate::platform::Platform;

/// Options for a sweep, resolved once at the command-line boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
  /// Directory holding one subdirectory per module.
  pub root: PathBuf,
  /// Source extension, without the leading dot.
  pub extension: String,
  /// Rebuild artifacts even when their file already exists.
  pub force: bool,
  /// Restrict the sweep to the module whose source file name (or logical name) matches.
  pub module_filter: Option<String>,
  pub naming: NamingMode,
  /// Platforms to build, in canonical order.
  pub platforms: Vec<Platform>,
}

impl Default for BuildOptions {
  fn default() -> Self {
    Self {
      root: config::modules_root(),
      extension: DEFAULT_EXTENSION.to_string(),
      force: false,
      module_filter: None,
      naming: NamingMode::default(),
      platforms: Platform::ALL.to_vec(),
    }
  }
}

/// Outcome of the build policy for one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
  /// Invoke the toolchain.
  Build,
  /// The output exists and the sweep is not forced.
  AlreadyPresent,
  /// The module filter excludes this module.
  Filtered,
}

impl Decision {
  pub fn should_build(self) -> bool {
    matches!(self, Decision::Build)
  }
}

/// An artifact together with what a sweep would do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedArtifact {
  #[serde(flatten)]
  pub artifact: Artifact,
  pub decision: Decision,
}

/// Progress notifications emitted while a sweep runs, in order.
#[derive(Debug, Clone, Copy)]
pub enum BuildEvent<'a> {
  /// The toolchain is about to be invoked.
  Started(&'a Artifact),
  /// The toolchain succeeded.
  Built(&'a Artifact),
  /// The artifact was skipped because its output exists.
  AlreadyPresent(&'a Artifact),
}

/// Counts for a sweep that ran to completion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepSummary {
  /// Outputs produced, in build order.
  pub built: Vec<PathBuf>,
  /// Outputs skipped because they already existed.
  pub skipped: Vec<PathBuf>,
  /// Modules excluded by the module filter.
  pub filtered: usize,
  #[serde(skip)]
  pub elapsed: Duration,
}

/// Errors that abort a sweep.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error(transparent)]
  Discovery(#[from] DiscoveryError),

  /// Checking whether an output exists failed.
  #[error("failed to check {}: {source}", path.display())]
  Exists { path: PathBuf, source: std::io::Error },

  /// The toolchain could not be started.
  #[error("failed to run {program}: {source}")]
  Spawn { program: String, source: std::io::Error },

  /// The toolchain ran and exited unsuccessfully.
  #[error("failed to build {} for {platform}: {stderr}", output.display())]
  BuildFailure {
    module: String,
    platform: Platform,
    output: PathBuf,
    code: Option<i32>,
    stderr: String,
  },
}
