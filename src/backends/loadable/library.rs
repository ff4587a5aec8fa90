// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Opening processor modules with the platform dynamic linker.

use std::path::{Path, PathBuf};

use libloading::Library;

use super::abi::{RawLoadFn, LOAD_SYMBOL};
use super::error::{ModuleError, ModuleResult};

/// An opened module and its `load` entry point.
///
/// `load` stays valid for as long as `library` is alive; the two are kept
/// together so the pointer can never outlive the mapping.
pub struct LoadedModule {
    pub path: PathBuf,
    pub load: RawLoadFn,
    pub library: Library,
}

pub struct ModuleLoader;

impl ModuleLoader {
    /// Open `path` and look up its `load` symbol.
    pub fn open<P: AsRef<Path>>(path: P) -> ModuleResult<LoadedModule> {
        let path = path.as_ref().to_path_buf();

        // Opening runs the module's initializers.
        let library = unsafe { Library::new(&path) }.map_err(|source| ModuleError::Open {
            path: path.clone(),
            source,
        })?;

        let load = unsafe { library.get::<RawLoadFn>(LOAD_SYMBOL) }
            .map(|symbol| *symbol)
            .map_err(|source| ModuleError::MissingEntryPoint {
                path: path.clone(),
                source,
            })?;

        Ok(LoadedModule {
            path,
            load,
            library,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_library_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.processor");
        std::fs::write(&path, b"definitely not a shared object").unwrap();

        let result = ModuleLoader::open(&path);
        assert!(matches!(result, Err(ModuleError::Open { .. })));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = ModuleLoader::open(dir.path().join("absent.processor"));
        assert!(result.is_err());
    }
}
