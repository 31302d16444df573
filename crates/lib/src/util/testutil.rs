//! Test utilities for modbin-lib.
//!
//! Provides a stand-in compiler script and a recording toolchain so builds
//! can be exercised without a real Go installation.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::platform::Platform;
use crate::toolchain::{CompileRequest, Toolchain, ToolchainError};

/// Writes a POSIX shell script that behaves like `go build -o <out> <src>`.
///
/// On success the script writes `"$GOOS <args...>"` into the output file.
/// With a non-empty `fail_stderr` it prints that text to stderr and exits 2
/// without producing output. Every call is appended to `invocations.log`
/// next to the script.
///
/// Returns the script path. Run it through `/bin/sh` rather than executing
/// it directly so tests never exec a file they just wrote.
#[cfg(unix)]
pub fn write_fake_toolchain(dir: &Path, fail_stderr: &str) -> PathBuf {
  let script = dir.join("fake-go");
  let body = format!(
    r#"all="$*"
echo "$GOOS $all" >> "$(dirname "$0")/invocations.log"
if [ -n '{fail}' ]; then
  printf '%s\n' '{fail}' >&2
  exit 2
fi
out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then out="$2"; fi
  shift
done
echo "$GOOS $all" > "$out"
"#,
    fail = fail_stderr
  );
  std::fs::write(&script, body).unwrap();
  script
}

/// One recorded compile call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub platform: Platform,
  pub output: PathBuf,
  pub source: PathBuf,
}

/// Toolchain double that records every request.
///
/// Successful calls create the output file so later sweeps see it present.
/// When `fail_with` is set every call fails with that stderr.
#[derive(Debug, Default)]
pub struct RecordingToolchain {
  pub invocations: Mutex<Vec<Invocation>>,
  pub fail_with: Option<String>,
}

impl RecordingToolchain {
  pub fn failing(stderr: &str) -> Self {
    Self {
      invocations: Mutex::new(Vec::new()),
      fail_with: Some(stderr.to_string()),
    }
  }

  pub fn calls(&self) -> Vec<Invocation> {
    self.invocations.lock().unwrap().clone()
  }
}

impl Toolchain for RecordingToolchain {
  async fn compile(&self, request: CompileRequest<'_>) -> Result<(), ToolchainError> {
    self.invocations.lock().unwrap().push(Invocation {
      platform: request.platform,
      output: request.output.to_path_buf(),
      source: request.source.to_path_buf(),
    });

    if let Some(stderr) = &self.fail_with {
      return Err(ToolchainError::Failed {
        code: Some(1),
        stderr: stderr.clone(),
      });
    }

    std::fs::write(request.output, request.platform.as_str()).map_err(|e| ToolchainError::Spawn {
      program: "recording".to_string(),
      source: e,
    })
  }
}
