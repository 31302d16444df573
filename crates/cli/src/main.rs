mod cmd;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{SelectArgs, ToolchainArgs, cmd_build, cmd_plan};
use output::{OutputFormat, print_error};

/// modbin - cross-compile module binaries for every target platform
#[derive(Parser)]
#[command(name = "modbin")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build missing module binaries (all of them with --force)
  Build {
    #[command(flatten)]
    select: SelectArgs,

    #[command(flatten)]
    toolchain: ToolchainArgs,
  },

  /// Show which binaries a build would produce, without building
  Plan {
    #[command(flatten)]
    select: SelectArgs,
  },
}

/// Directives added by `--verbose` on top of whatever `RUST_LOG` selects.
const VERBOSE_DIRECTIVES: [&str; 2] = ["modbin=debug", "modbin_lib=debug"];

fn log_filter(verbose: bool, rust_log: Option<&str>) -> Result<EnvFilter> {
  let mut filter = EnvFilter::builder().parse_lossy(rust_log.unwrap_or_default());
  if verbose {
    for directive in VERBOSE_DIRECTIVES {
      filter = filter.add_directive(directive.parse().context("Invalid log directive")?);
    }
  }
  Ok(filter)
}

fn init_tracing(verbose: bool) -> Result<()> {
  let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
  let filter = log_filter(verbose, rust_log.as_deref())?;

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let result = init_tracing(cli.verbose).and_then(|()| match &cli.command {
    Commands::Build { select, toolchain } => cmd_build(select, toolchain, cli.output),
    Commands::Plan { select } => cmd_plan(select, cli.output),
  });

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
