//! Implementation of the `modbin plan` command.
//!
//! Shows what `modbin build` would do with the same flags, without running
//! the toolchain.

use anyhow::{Context, Result};

use modbin_lib::build::{Decision, plan};

use crate::cmd::SelectArgs;
use crate::output::{ArtifactStatus, OutputFormat, print_artifact, print_json, print_plan_summary, print_unmatched_filter};

pub fn cmd_plan(select: &SelectArgs, output: OutputFormat) -> Result<()> {
  let options = select.to_options();
  let planned = plan(&options).context("Failed to plan build")?;

  if output.is_json() {
    return print_json(&planned);
  }

  for entry in &planned {
    if let Some(status) = ArtifactStatus::from_plan(entry) {
      print_artifact(status, &entry.artifact.output);
    }
  }

  let count = |decision: Decision| planned.iter().filter(|p| p.decision == decision).count();
  let to_build = count(Decision::Build);
  let present = count(Decision::AlreadyPresent);

  if let Some(filter) = &options.module_filter {
    if to_build + present == 0 {
      print_unmatched_filter(filter);
    }
  }

  print_plan_summary(&options.root, options.naming, to_build, present);

  Ok(())
}
