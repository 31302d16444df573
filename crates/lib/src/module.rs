//! Module discovery.
//!
//! A module is one directory under the modules root holding exactly one
//! source file with the configured extension (`root/*/*.<ext>`). The
//! directory name is the module's logical name.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Errors that can occur while scanning the modules root.
#[derive(Debug, Error)]
pub enum DiscoveryError {
  #[error("modules root not found: {}", path.display())]
  RootNotFound { path: PathBuf },

  #[error("failed to read directory {}: {source}", path.display())]
  ReadDir { path: PathBuf, source: std::io::Error },

  #[error("module {name} has more than one .{extension} source: {} and {}", first.display(), second.display())]
  AmbiguousModule {
    name: String,
    extension: String,
    first: PathBuf,
    second: PathBuf,
  },

  #[error("path is not valid UTF-8: {}", path.display())]
  InvalidName { path: PathBuf },
}

/// A discovered source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
  /// Logical name, taken from the containing directory.
  pub name: String,
  /// Directory holding the source and, by default, its binaries.
  pub dir: PathBuf,
  /// Path to the single compilable source file.
  pub source: PathBuf,
}

impl Module {
  /// File name of the source, e.g. `shell_module.go`.
  pub fn file_name(&self) -> &str {
    self.source.file_name().and_then(OsStr::to_str).unwrap_or_default()
  }

  /// Whether a module filter selects this module.
  ///
  /// The filter matches the source file name or the logical name.
  pub fn matches(&self, filter: &str) -> bool {
    self.file_name() == filter || self.name == filter
  }
}

/// Lazily scans `root/*/*.<extension>`.
///
/// Module directories are visited in file-name order. Directories without a
/// matching source are skipped; hidden directories are ignored.
///
/// Returns `RootNotFound` up front if `root` is not a directory. Everything
/// else is reported per item by the iterator.
pub fn discover(root: &Path, extension: &str) -> Result<Modules, DiscoveryError> {
  if !root.is_dir() {
    return Err(DiscoveryError::RootNotFound {
      path: root.to_path_buf(),
    });
  }

  let entries = WalkDir::new(root)
    .min_depth(1)
    .max_depth(1)
    .follow_links(true)
    .sort_by_file_name()
    .into_iter();

  Ok(Modules {
    root: root.to_path_buf(),
    extension: extension.trim_start_matches('.').to_string(),
    entries,
  })
}

/// Iterator returned by [`discover`]. One pass; re-scan to restart.
pub struct Modules {
  root: PathBuf,
  extension: String,
  entries: walkdir::IntoIter,
}

impl Modules {
  fn load(&self, dir: &Path) -> Result<Option<Module>, DiscoveryError> {
    let name = dir
      .file_name()
      .and_then(OsStr::to_str)
      .ok_or_else(|| DiscoveryError::InvalidName { path: dir.to_path_buf() })?
      .to_string();

    let read_dir = fs::read_dir(dir).map_err(|e| DiscoveryError::ReadDir {
      path: dir.to_path_buf(),
      source: e,
    })?;

    let mut sources = Vec::new();
    for entry in read_dir {
      let entry = entry.map_err(|e| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
      })?;
      if is_hidden(&entry.file_name()) {
        continue;
      }
      let path = entry.path();
      if path.is_file() && path.extension().and_then(OsStr::to_str) == Some(self.extension.as_str()) {
        if path.file_name().and_then(OsStr::to_str).is_none() {
          return Err(DiscoveryError::InvalidName { path });
        }
        sources.push(path);
      }
    }
    sources.sort();

    let mut sources = sources.into_iter();
    let Some(source) = sources.next() else {
      debug!(dir = %dir.display(), extension = %self.extension, "no source in directory, skipping");
      return Ok(None);
    };
    if let Some(second) = sources.next() {
      return Err(DiscoveryError::AmbiguousModule {
        name,
        extension: self.extension.clone(),
        first: source,
        second,
      });
    }

    Ok(Some(Module {
      name,
      dir: dir.to_path_buf(),
      source,
    }))
  }
}

impl Iterator for Modules {
  type Item = Result<Module, DiscoveryError>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let entry = match self.entries.next()? {
        Ok(entry) => entry,
        Err(e) => {
          let path = e.path().unwrap_or(&self.root).to_path_buf();
          return Some(Err(DiscoveryError::ReadDir {
            path,
            source: e.into(),
          }));
        }
      };

      if !entry.file_type().is_dir() || is_hidden(entry.file_name()) {
        continue;
      }

      match self.load(entry.path()) {
        Ok(Some(module)) => return Some(Ok(module)),
        Ok(None) => continue,
        Err(e) => return Some(Err(e)),
      }
    }
  }
}

fn is_hidden(name: &OsStr) -> bool {
  name.to_str().is_some_and(|s| s.starts_with('.'))
}
