//! Flags shared by the `build` and `plan` commands.
//!
//! Parsed once here into the library's option structs; nothing downstream
//! inspects raw arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, ValueEnum};

use modbin_lib::artifact::NamingMode;
use modbin_lib::build::BuildOptions;
use modbin_lib::config;
use modbin_lib::consts::DEFAULT_EXTENSION;
use modbin_lib::platform::Platform;
use modbin_lib::toolchain::CommandToolchain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamingArg {
  /// <module>/<name>.<platform>
  Qualified,
  /// <module>/<platform>
  Bare,
}

impl From<NamingArg> for NamingMode {
  fn from(value: NamingArg) -> Self {
    match value {
      NamingArg::Qualified => NamingMode::Qualified,
      NamingArg::Bare => NamingMode::Bare,
    }
  }
}

#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
  /// Directory with one subdirectory per module (default: $MODBIN_ROOT or "modules")
  #[arg(long)]
  pub root: Option<PathBuf>,

  /// Source file extension to look for in each module directory
  #[arg(long, default_value = DEFAULT_EXTENSION)]
  pub ext: String,

  /// Rebuild every artifact, even if its binary already exists
  #[arg(short, long)]
  pub force: bool,

  /// Only build the module with this source file name (e.g. shell_module.go) or directory name
  #[arg(short, long, value_name = "NAME")]
  pub module: Option<String>,

  /// How binaries are named inside the module directory
  #[arg(long, value_enum, default_value_t = NamingArg::Qualified)]
  pub naming: NamingArg,

  /// Target platform (linux or darwin); repeat to select several (default: all)
  #[arg(long = "platform", value_name = "PLATFORM", value_parser = Platform::from_str)]
  pub platforms: Vec<Platform>,
}

impl SelectArgs {
  pub fn to_options(&self) -> BuildOptions {
    BuildOptions {
      root: self.root.clone().unwrap_or_else(config::modules_root),
      extension: self.ext.clone(),
      force: self.force,
      module_filter: self.module.clone(),
      naming: self.naming.into(),
      platforms: self.platforms.clone(),
    }
  }
}

#[derive(Debug, Clone, Args)]
pub struct ToolchainArgs {
  /// Compiler program (default: $MODBIN_TOOLCHAIN or "go")
  #[arg(long, value_name = "PROGRAM")]
  pub toolchain: Option<String>,

  /// Argument placed before `build`; repeat for several (e.g. --toolchain godep --toolchain-arg go)
  #[arg(long = "toolchain-arg", value_name = "ARG", allow_hyphen_values = true)]
  pub toolchain_args: Vec<String>,

  /// Environment variable carrying the target platform (default: $MODBIN_PLATFORM_ENV or "GOOS")
  #[arg(long, value_name = "VAR")]
  pub platform_env: Option<String>,
}

impl ToolchainArgs {
  pub fn to_toolchain(&self) -> CommandToolchain {
    CommandToolchain::new(self.toolchain.clone().unwrap_or_else(config::toolchain_program))
      .with_args(self.toolchain_args.clone())
      .with_platform_env(self.platform_env.clone().unwrap_or_else(config::platform_env))
  }
}
