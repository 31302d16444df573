//! Compiler toolchain invocation.
//!
//! The orchestrator only needs one capability from a toolchain: compile a
//! source file for a platform into an output path, or fail with diagnostics.
//! [`CommandToolchain`] provides it by running an external compiler.

use std::future::Future;
use std::path::Path;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::artifact::Artifact;
use crate::consts::{DEFAULT_PLATFORM_ENV, DEFAULT_TOOLCHAIN};
use crate::platform::Platform;

#[derive(Debug, Error)]
pub enum ToolchainError {
  /// The compiler process could not be started.
  #[error("failed to run {program}: {source}")]
  Spawn { program: String, source: std::io::Error },

  /// The compiler exited unsuccessfully.
  #[error("compiler exited with code {code:?}: {stderr}")]
  Failed { code: Option<i32>, stderr: String },
}

/// One compile invocation.
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
  pub platform: Platform,
  pub output: &'a Path,
  pub source: &'a Path,
}

impl<'a> CompileRequest<'a> {
  pub fn for_artifact(artifact: &'a Artifact) -> Self {
    Self {
      platform: artifact.platform,
      output: &artifact.output,
      source: &artifact.module.source,
    }
  }
}

/// Compiles a single source file for a target platform.
pub trait Toolchain {
  fn compile(&self, request: CompileRequest<'_>) -> impl Future<Output = Result<(), ToolchainError>> + Send;
}

/// Runs `<program> [args...] build -o <output> <source>` with the target
/// platform exported in `platform_env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandToolchain {
  pub program: String,
  /// Arguments placed before `build`, e.g. `["go"]` for `godep go build`.
  pub args: Vec<String>,
  pub platform_env: String,
}

impl Default for CommandToolchain {
  fn default() -> Self {
    Self {
      program: DEFAULT_TOOLCHAIN.to_string(),
      args: Vec::new(),
      platform_env: DEFAULT_PLATFORM_ENV.to_string(),
    }
  }
}

impl CommandToolchain {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      ..Self::default()
    }
  }

  pub fn with_args(mut self, args: Vec<String>) -> Self {
    self.args = args;
    self
  }

  pub fn with_platform_env(mut self, platform_env: impl Into<String>) -> Self {
    self.platform_env = platform_env.into();
    self
  }

  /// Human-readable rendering of the invocation, used for progress output.
  pub fn describe(&self, request: &CompileRequest<'_>) -> String {
    let mut parts = vec![format!("{}={}", self.platform_env, request.platform), self.program.clone()];
    parts.extend(self.args.iter().cloned());
    parts.push("build".to_string());
    parts.push("-o".to_string());
    parts.push(request.output.display().to_string());
    parts.push(request.source.display().to_string());
    parts.join(" ")
  }
}

impl Toolchain for CommandToolchain {
  async fn compile(&self, request: CompileRequest<'_>) -> Result<(), ToolchainError> {
    info!(cmd = %self.describe(&request), "executing");

    let output = Command::new(&self.program)
      .args(&self.args)
      .arg("build")
      .arg("-o")
      .arg(request.output)
      .arg(request.source)
      .env(&self.platform_env, request.platform.as_str())
      .stdin(Stdio::null())
      .output()
      .await
      .map_err(|e| ToolchainError::Spawn {
        program: self.program.clone(),
        source: e,
      })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
      debug!(stdout = %stdout.trim(), "compiler stdout");
    }

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      return Err(ToolchainError::Failed {
        code: output.status.code(),
        stderr,
      });
    }

    Ok(())
  }
}
