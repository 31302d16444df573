//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a `modules` root and a
/// fake compiler script that records every invocation.
pub struct TestEnv {
  pub temp: TempDir,
  pub script: PathBuf,
}

impl TestEnv {
  /// Create an environment whose compiler always succeeds.
  pub fn new() -> Self {
    Self::with_compiler_stderr("")
  }

  /// Create an environment whose compiler fails with `stderr` (when non-empty).
  pub fn with_compiler_stderr(stderr: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("fake-go");
    std::fs::write(&script, fake_compiler(stderr)).unwrap();
    std::fs::create_dir_all(temp.path().join("modules")).unwrap();
    Self { temp, script }
  }

  /// Modules root (isolated per test).
  pub fn root_path(&self) -> PathBuf {
    let p = self.temp.path().join("modules");
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Add a module directory containing `<name>_module.go`.
  pub fn add_module(&self, name: &str) -> PathBuf {
    let dir = self.root_path().join(name);
    std::fs::create_dir_all(&dir).unwrap();
    let source = dir.join(format!("{}_module.go", name));
    std::fs::write(&source, "package main\n\nfunc main() {}\n").unwrap();
    source
  }

  /// Write a file relative to the modules root.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.root_path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Lines the fake compiler logged, one per invocation (`"<GOOS> <args>"`).
  pub fn invocations(&self) -> Vec<String> {
    let log = self.temp.path().join("invocations.log");
    match std::fs::read_to_string(log) {
      Ok(content) => content.lines().map(str::to_string).collect(),
      Err(_) => Vec::new(),
    }
  }

  /// `modbin build` pointed at the isolated root and the fake compiler.
  ///
  /// The script is run through `/bin/sh` so it never needs to be executable.
  pub fn build_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("modbin");
    cmd.arg("build").arg("--root").arg(self.root_path());
    cmd.env("MODBIN_TOOLCHAIN", "/bin/sh");
    cmd.arg("--toolchain-arg").arg(&self.script);
    cmd
  }

  /// `modbin plan` pointed at the isolated root.
  pub fn plan_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("modbin");
    cmd.arg("plan").arg("--root").arg(self.root_path());
    cmd
  }

  pub fn exists(&self, relative_path: &str) -> bool {
    self.root_path().join(relative_path).exists()
  }
}

/// A stand-in for `go build -o <out> <src>`.
fn fake_compiler(stderr: &str) -> String {
  format!(
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
    fail = stderr
  )
}

/// Counts how many lines of `output` contain `needle`.
pub fn count_lines(output: &[u8], needle: &str) -> usize {
  String::from_utf8_lossy(output).lines().filter(|l| l.contains(needle)).count()
}
