//! Sweep execution.
//!
//! This module holds the build policy and drives the toolchain over every
//! (module, platform) pair of a modules tree.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::artifact::{Artifact, artifact_path};
use crate::build::types::{BuildError, BuildEvent, BuildOptions, Decision, PlannedArtifact, SweepSummary};
use crate::module::{Module, discover};
use crate::platform::{Platform, canonical_selection};
use crate::toolchain::{CompileRequest, Toolchain, ToolchainError};

/// Computes the artifact for `module` on `platform` and records whether its
/// output currently exists as a regular file.
pub fn evaluate(module: &Module, platform: Platform, options: &BuildOptions) -> Result<Artifact, BuildError> {
  let output = artifact_path(module, platform, options.naming);
  let exists = match std::fs::metadata(&output) {
    Ok(metadata) => metadata.is_file(),
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
    Err(e) => {
      return Err(BuildError::Exists {
        path: output.clone(),
        source: e,
      });
    }
  };

  Ok(Artifact {
    module: module.clone(),
    platform,
    output,
    exists,
  })
}

/// Decides what to do with an artifact.
///
/// A module filter that does not match excludes the artifact regardless of
/// its state. Otherwise the artifact is built when forced or when its output
/// is missing.
pub fn decide(artifact: &Artifact, force: bool, module_filter: Option<&str>) -> Decision {
  if module_filter.is_some_and(|filter| !artifact.module.matches(filter)) {
    return Decision::Filtered;
  }

  if force || !artifact.exists {
    Decision::Build
  } else {
    Decision::AlreadyPresent
  }
}

/// Evaluates every artifact of the sweep without invoking the toolchain.
///
/// Artifacts of filtered-out modules are included with `Decision::Filtered`.
pub fn plan(options: &BuildOptions) -> Result<Vec<PlannedArtifact>, BuildError> {
  let platforms = canonical_selection(&options.platforms);
  let mut planned = Vec::new();

  for module in discover(&options.root, &options.extension)? {
    let module = module?;
    for &platform in &platforms {
      let artifact = evaluate(&module, platform, options)?;
      let decision = decide(&artifact, options.force, options.module_filter.as_deref());
      planned.push(PlannedArtifact { artifact, decision });
    }
  }

  Ok(planned)
}

/// Builds a single artifact with `toolchain`.
pub async fn execute_build<T: Toolchain>(toolchain: &T, artifact: &Artifact) -> Result<(), BuildError> {
  match toolchain.compile(CompileRequest::for_artifact(artifact)).await {
    Ok(()) => {
      info!(output = %artifact.output.display(), "built artifact");
      Ok(())
    }
    Err(ToolchainError::Spawn { program, source }) => Err(BuildError::Spawn { program, source }),
    Err(ToolchainError::Failed { code, stderr }) => {
      let stderr = if stderr.is_empty() {
        match code {
          Some(code) => format!("compiler exited with code {}", code),
          None => "compiler terminated by signal".to_string(),
        }
      } else {
        stderr
      };
      Err(BuildError::BuildFailure {
        module: artifact.module.name.clone(),
        platform: artifact.platform,
        output: artifact.output.clone(),
        code,
        stderr,
      })
    }
  }
}

/// Runs a full sweep.
///
/// For each discovered module, for each selected platform in canonical
/// order, the artifact is evaluated, decided and built if needed.
/// `on_event` observes progress as it happens. The first error stops the
/// sweep: no later module or platform is attempted.
pub async fn run_sweep<T, F>(toolchain: &T, options: &BuildOptions, mut on_event: F) -> Result<SweepSummary, BuildError>
where
  T: Toolchain,
  F: FnMut(BuildEvent<'_>),
{
  let start = Instant::now();
  let platforms = canonical_selection(&options.platforms);
  let filter = options.module_filter.as_deref();
  let mut summary = SweepSummary::default();
  let mut matched = false;

  info!(root = %options.root.display(), force = options.force, "starting sweep");

  for module in discover(&options.root, &options.extension)? {
    let module = module?;

    if filter.is_some_and(|f| !module.matches(f)) {
      debug!(module = %module.name, "module excluded by filter");
      summary.filtered += 1;
      continue;
    }
    matched = true;

    for &platform in &platforms {
      let artifact = evaluate(&module, platform, options)?;

      match decide(&artifact, options.force, filter) {
        Decision::Build => {
          on_event(BuildEvent::Started(&artifact));
          execute_build(toolchain, &artifact).await?;
          on_event(BuildEvent::Built(&artifact));
          summary.built.push(artifact.output);
        }
        Decision::AlreadyPresent => {
          info!(output = %artifact.output.display(), "artifact already present");
          on_event(BuildEvent::AlreadyPresent(&artifact));
          summary.skipped.push(artifact.output);
        }
        Decision::Filtered => {}
      }
    }
  }

  if let (Some(filter), false) = (filter, matched) {
    warn!(filter = %filter, "module filter matched no modules");
  }

  summary.elapsed = start.elapsed();
  Ok(summary)
}
