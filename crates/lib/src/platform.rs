use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Operating systems artifacts are cross-compiled for.
///
/// The set is fixed. `ALL` lists them in the canonical build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  Linux,
  Darwin,
}

impl Platform {
  pub const ALL: [Platform; 2] = [Platform::Linux, Platform::Darwin];

  /// Returns the lowercase identifier the toolchain understands
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::Darwin => "darwin",
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0} (expected one of: linux, darwin)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
  type Err = UnknownPlatform;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "linux" => Ok(Self::Linux),
      "darwin" | "macos" => Ok(Self::Darwin),
      _ => Err(UnknownPlatform(s.to_string())),
    }
  }
}

/// Normalizes a platform selection into canonical order without duplicates.
///
/// An empty selection means every platform.
pub fn canonical_selection(selected: &[Platform]) -> Vec<Platform> {
  if selected.is_empty() {
    return Platform::ALL.to_vec();
  }
  let mut platforms = selected.to_vec();
  platforms.sort();
  platforms.dedup();
  platforms
}
