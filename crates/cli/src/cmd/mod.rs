mod args;
mod build;
mod plan;

pub use args::{SelectArgs, ToolchainArgs};
pub use build::cmd_build;
pub use plan::cmd_plan;
