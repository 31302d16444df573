/// Directory scanned for modules when neither a flag nor `MODBIN_ROOT` is given.
pub const DEFAULT_ROOT: &str = "modules";

/// Source file extension matched inside each module directory.
pub const DEFAULT_EXTENSION: &str = "go";

/// Compiler program invoked when neither a flag nor `MODBIN_TOOLCHAIN` is given.
pub const DEFAULT_TOOLCHAIN: &str = "go";

/// Environment variable the toolchain reads the target platform from.
pub const DEFAULT_PLATFORM_ENV: &str = "GOOS";

pub const ROOT_ENV: &str = "MODBIN_ROOT";
pub const TOOLCHAIN_ENV: &str = "MODBIN_TOOLCHAIN";
pub const PLATFORM_ENV_ENV: &str = "MODBIN_PLATFORM_ENV";
