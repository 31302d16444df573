//! Implementation of the `modbin build` command.
//!
//! Runs a sweep over the modules tree, compiling every artifact whose binary
//! is missing (or every artifact with `--force`).

use anyhow::{Context, Result};
use tracing::debug;

use modbin_lib::build::{BuildEvent, run_sweep};
use modbin_lib::toolchain::CompileRequest;

use crate::cmd::{SelectArgs, ToolchainArgs};
use crate::output::{
  ArtifactStatus, OutputFormat, print_artifact, print_build_summary, print_invocation, print_json,
  print_unmatched_filter,
};

pub fn cmd_build(select: &SelectArgs, toolchain: &ToolchainArgs, output: OutputFormat) -> Result<()> {
  let options = select.to_options();
  let toolchain = toolchain.to_toolchain();
  debug!(?options, ?toolchain, "resolved build options");

  let text = !output.is_json();
  let on_event = |event: BuildEvent<'_>| {
    if !text {
      return;
    }
    match event {
      BuildEvent::Started(artifact) => print_invocation(&toolchain.describe(&CompileRequest::for_artifact(artifact))),
      BuildEvent::Built(artifact) => print_artifact(ArtifactStatus::Built, &artifact.output),
      BuildEvent::AlreadyPresent(artifact) => print_artifact(ArtifactStatus::Present, &artifact.output),
    }
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let summary = rt
    .block_on(run_sweep(&toolchain, &options, on_event))
    .context("Build failed")?;

  if output.is_json() {
    return print_json(&summary);
  }

  if let Some(filter) = &options.module_filter {
    if summary.built.is_empty() && summary.skipped.is_empty() {
      print_unmatched_filter(filter);
    }
  }

  print_build_summary(&summary);

  Ok(())
}
