// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use super::consts::{DEFAULT_PREFIX, PROCESSOR_EXTENSION, PROCESSOR_PATH_ENV};

/// Ordered directories searched for processor modules.
///
/// Resolution order:
/// 1. The current working directory
/// 2. Each entry of `ATP_PROCESSOR_PATH`, left to right
/// 3. `<prefix>/lib/atp`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// Build the search order from the process environment.
    pub fn from_env() -> Self {
        let path_var = std::env::var(PROCESSOR_PATH_ENV).ok();
        Self::from_path_var(path_var.as_deref(), Path::new(DEFAULT_PREFIX))
    }

    /// Build the search order from an explicit path variable value and prefix.
    /// Empty entries in `path_var` are skipped.
    pub fn from_path_var(path_var: Option<&str>, prefix: &Path) -> Self {
        let mut dirs = vec![PathBuf::from(".")];
        if let Some(value) = path_var {
            dirs.extend(
                value
                    .split(':')
                    .filter(|entry| !entry.is_empty())
                    .map(PathBuf::from),
            );
        }
        dirs.push(prefix.join("lib").join("atp"));
        Self { dirs }
    }

    /// Search exactly `dirs`, in order.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    /// Every existing `<dir>/<name>.processor` file, in search order.
    pub fn candidates<'a>(&'a self, name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        self.iter()
            .map(move |dir| module_path(dir, name))
            .filter(|path| path.is_file())
    }
}

/// `<dir>/<name>.processor`
pub fn module_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, PROCESSOR_EXTENSION))
}
