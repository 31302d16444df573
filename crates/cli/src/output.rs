//! Terminal rendering for modbin.
//!
//! Every artifact is reported on one line: a status symbol, the output path
//! and a short note. Summaries and errors share the same colored style.

use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream, Style};

use modbin_lib::artifact::NamingMode;
use modbin_lib::build::{Decision, PlannedArtifact, SweepSummary};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

/// What happened, or will happen, to one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
  /// Planned: output missing.
  Build,
  /// Planned: output exists but the sweep is forced.
  Rebuild,
  /// Output exists and was left alone.
  Present,
  /// The toolchain produced the output.
  Built,
}

impl ArtifactStatus {
  /// Status a plan entry is shown with. Filtered entries are not shown.
  pub fn from_plan(entry: &PlannedArtifact) -> Option<Self> {
    match entry.decision {
      Decision::Build if entry.artifact.exists => Some(Self::Rebuild),
      Decision::Build => Some(Self::Build),
      Decision::AlreadyPresent => Some(Self::Present),
      Decision::Filtered => None,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      Self::Build | Self::Rebuild => "+",
      Self::Present => "•",
      Self::Built => "✓",
    }
  }

  fn note(self) -> &'static str {
    match self {
      Self::Build => "build",
      Self::Rebuild => "rebuild",
      Self::Present => "already present",
      Self::Built => "successfully created",
    }
  }

  fn style(self) -> Style {
    match self {
      Self::Build | Self::Rebuild | Self::Built => Style::new().green(),
      Self::Present => Style::new().blue(),
    }
  }
}

pub fn print_artifact(status: ArtifactStatus, path: &Path) {
  println!(
    "  {} {} {}",
    status
      .symbol()
      .if_supports_color(Stream::Stdout, |s| s.style(status.style())),
    path.display(),
    format!("({})", status.note()).if_supports_color(Stream::Stdout, |s| s.dimmed())
  );
}

/// Announces a toolchain invocation before it runs.
pub fn print_invocation(command: &str) {
  println!(
    "{} {}",
    "→".if_supports_color(Stream::Stdout, |s| s.cyan()),
    format!("Executing => \"{}\"", command).if_supports_color(Stream::Stdout, |s| s.dimmed())
  );
}

pub fn print_build_summary(summary: &SweepSummary) {
  println!();
  println!(
    "{} Build complete!",
    "✓".if_supports_color(Stream::Stdout, |s| s.green())
  );
  print_stat("Built", summary.built.len());
  print_stat("Already present", summary.skipped.len());
  if summary.filtered > 0 {
    print_stat("Filtered out", summary.filtered);
  }
  print_stat("Duration", format_duration(summary.elapsed));
  if !summary.skipped.is_empty() {
    println!(
      "{}",
      "Pass --force to recompile all modules".if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
  }
}

pub fn print_plan_summary(root: &Path, naming: NamingMode, to_build: usize, present: usize) {
  println!();
  println!("Root: {}", root.display());
  print_stat("Naming", naming.as_str());
  print_stat("To build", to_build);
  print_stat("Already present", present);
}

/// Printed when `--module` selected nothing.
pub fn print_unmatched_filter(filter: &str) {
  eprintln!(
    "{} {}",
    "⚠".if_supports_color(Stream::Stderr, |s| s.yellow()),
    format!("Module filter '{}' matched no modules", filter).if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    "✗".if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

fn print_stat(label: &str, value: impl Display) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    format!("{}m {}s", secs / 60, secs % 60)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
