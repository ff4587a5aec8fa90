// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;

use libloading::Library;

use crate::errors::ProcessorError;
use crate::record::{Array, Dictionary};
use crate::traits::{Handoff, LoadContext, Processor, RunContext};

use super::abi::{decode_status, RawInterface, RawLoadFn};
use super::library::LoadedModule;

/// A processor living in a dynamically loaded module.
///
/// Teardown order is fixed: the module's `finalize` runs first, then the
/// library handle is closed.
pub struct DynamicProcessor {
    name: String,
    interface: RawInterface,
    finalized: bool,
    // Declared last so it is dropped after `Drop::drop` has finalized.
    library: Option<Library>,
}

impl DynamicProcessor {
    /// Call the module's `load` entry point for one stage.
    ///
    /// When `load` refuses the parameters the library is closed again before
    /// returning.
    pub fn load(
        name: &str,
        module: LoadedModule,
        ctx: &LoadContext,
        parameters: &Array,
    ) -> Result<Self, ProcessorError> {
        // SAFETY: `load` was resolved from `library`, which moves in with it.
        unsafe {
            Self::from_entry_point(
                name,
                &module.path,
                module.load,
                Some(module.library),
                ctx,
                parameters,
            )
        }
    }

    /// Run a raw `load` entry point and wrap the interface it fills.
    ///
    /// An interface without `execute` is finalized, then `library` is
    /// closed, before the error is returned.
    ///
    /// # Safety
    /// `load` and every entry point it hands back must stay callable while
    /// `library` is alive, or for the whole process when `library` is `None`.
    pub(crate) unsafe fn from_entry_point(
        name: &str,
        origin: &Path,
        load: RawLoadFn,
        library: Option<Library>,
        ctx: &LoadContext,
        parameters: &Array,
    ) -> Result<Self, ProcessorError> {
        let mut interface = RawInterface::empty();
        let accepted = load(
            ctx.stage_index,
            ctx.help_requested,
            parameters,
            &mut interface,
        );

        if !accepted {
            return Err(ProcessorError::Failed(format!(
                "{}: module {} rejected its parameters",
                name,
                origin.display()
            )));
        }

        let processor = Self::from_interface(name, interface, library);
        if processor.interface.execute.is_none() {
            // Dropping `processor` finalizes the module state first.
            return Err(ProcessorError::Failed(format!(
                "{}: module {} did not provide an execute entry point",
                name,
                origin.display()
            )));
        }
        Ok(processor)
    }

    /// Wrap an interface filled by a `load` entry point.
    ///
    /// # Safety
    /// The interface's entry points must stay callable for as long as the
    /// returned processor lives: either `library` owns the code, or the code
    /// is linked into the current binary.
    pub unsafe fn from_interface(
        name: &str,
        interface: RawInterface,
        library: Option<Library>,
    ) -> Self {
        Self {
            name: name.to_string(),
            interface,
            finalized: false,
            library,
        }
    }
}

impl Processor for DynamicProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(
        &mut self,
        ctx: &RunContext,
        input: &mut Dictionary,
        output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        if self.finalized {
            return Err(ProcessorError::Failed(format!(
                "{}: executed after finalize",
                self.name
            )));
        }
        let execute = self.interface.execute.ok_or_else(|| {
            ProcessorError::Failed(format!("{}: no execute entry point", self.name))
        })?;

        let status = unsafe {
            execute(
                ctx.stage_count,
                ctx.help_requested,
                input,
                output,
                self.interface.token,
            )
        };
        decode_status(&self.name, status)
    }

    fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;
        if let Some(finalize) = self.interface.finalize {
            unsafe { finalize(self.interface.token) };
        }
        self.interface.token = std::ptr::null_mut();
    }
}

impl Drop for DynamicProcessor {
    fn drop(&mut self) {
        self.finalize();
        if let Some(library) = self.library.take() {
            drop(library);
        }
    }
}
