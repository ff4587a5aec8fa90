// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Enumeration of every processor the loader could resolve.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::config::{SearchPaths, PROCESSOR_EXTENSION};

/// Module names found in one search directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub dir: PathBuf,
    pub modules: Vec<String>,
}

/// Dynamic modules per search directory, then built-in names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorListing {
    pub external: Vec<DirectoryListing>,
    pub builtin: Vec<&'static str>,
}

impl ProcessorListing {
    pub fn discover(search_paths: &SearchPaths, builtin: Vec<&'static str>) -> Self {
        let external = search_paths
            .iter()
            .map(|dir| DirectoryListing {
                dir: dir.to_path_buf(),
                modules: modules_in(dir),
            })
            .collect();
        Self { external, builtin }
    }
}

/// Sorted stems of `*.processor` files in `dir`. Unreadable directories
/// list nothing.
fn modules_in(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut modules: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == PROCESSOR_EXTENSION)
        })
        .filter_map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .collect();
    modules.sort();
    modules
}

impl Display for ProcessorListing {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "External Processors:")?;
        for listing in &self.external {
            writeln!(f, "    {}:", listing.dir.display())?;
            for module in &listing.modules {
                writeln!(f, "        {}", module)?;
            }
        }
        writeln!(f, "Built-in Processors:")?;
        for name in &self.builtin {
            writeln!(f, "    {}", name)?;
        }
        Ok(())
    }
}
