//! Artifact naming.
//!
//! An artifact is the binary produced for one (module, platform) pair. Its
//! path depends only on the module directory, the module name, the platform
//! and the naming mode, and is always inside the module's own directory.

use std::path::PathBuf;

use serde::Serialize;

use crate::module::Module;
use crate::platform::Platform;

/// How the binary file inside a module directory is named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
  /// `<dir>/<name>.<platform>`, e.g. `modules/shell/shell.linux`
  #[default]
  Qualified,
  /// `<dir>/<platform>`, e.g. `modules/shell/linux`
  Bare,
}

impl NamingMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Qualified => "qualified",
      Self::Bare => "bare",
    }
  }
}

/// Computes the output path for `module` built for `platform`.
pub fn artifact_path(module: &Module, platform: Platform, naming: NamingMode) -> PathBuf {
  let file_name = match naming {
    NamingMode::Qualified => format!("{}.{}", module.name, platform),
    NamingMode::Bare => platform.to_string(),
  };
  module.dir.join(file_name)
}

/// The binary expected for one (module, platform) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
  pub module: Module,
  pub platform: Platform,
  pub output: PathBuf,
  /// Whether `output` existed when the artifact was evaluated.
  pub exists: bool,
}
