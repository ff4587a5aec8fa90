// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The C ABI shared by the host and dynamically loaded processor modules.
//!
//! A module exports one symbol, `load`, with the [`RawLoadFn`] signature. On
//! success `load` fills a [`RawInterface`] holding an opaque token and the
//! execute/finalize entry points. Records cross the boundary as pointers to
//! the host's own [`Dictionary`] and [`Array`] types, so a module must be
//! built against the same `atp` version and toolchain as the host.
//!
//! Module authors do not write any of this by hand:
//!
//! ```rust,ignore
//! fn load(ctx: &LoadContext, parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
//!     Ok(Box::new(Upcase::default()))
//! }
//!
//! atp::export_processor!(load);
//! ```

#![allow(improper_ctypes_definitions)]

use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};

use crate::errors::ProcessorError;
use crate::observability::messages::loader::ModuleEntryFailed;
use crate::observability::messages::StructuredLog;
use crate::record::{Array, Dictionary};
use crate::traits::{Handoff, LoadContext, LoadFn, Processor, RunContext};

/// Name of the entry point every module exports.
pub const LOAD_SYMBOL: &[u8] = b"load\0";

pub const STATUS_FAILED: u32 = 0;
pub const STATUS_PRODUCED: u32 = 1;
pub const STATUS_PASS_THROUGH: u32 = 2;
/// The module's processor panicked; the panic did not cross the boundary.
pub const STATUS_PANICKED: u32 = 3;

pub type RawLoadFn = unsafe extern "C" fn(
    stage_index: u32,
    help_requested: bool,
    parameters: *const Array,
    interface: *mut RawInterface,
) -> bool;

pub type RawExecuteFn = unsafe extern "C" fn(
    stage_count: u32,
    help_requested: bool,
    input: *mut Dictionary,
    output: *mut Dictionary,
    token: *mut c_void,
) -> u32;

pub type RawFinalizeFn = unsafe extern "C" fn(token: *mut c_void);

/// Filled in by a module's `load`.
#[repr(C)]
#[derive(Debug)]
pub struct RawInterface {
    pub token: *mut c_void,
    pub execute: Option<RawExecuteFn>,
    pub finalize: Option<RawFinalizeFn>,
}

impl RawInterface {
    pub fn empty() -> Self {
        Self {
            token: std::ptr::null_mut(),
            execute: None,
            finalize: None,
        }
    }

    /// Hand `processor` over to the raw entry points.
    ///
    /// The processor is released by the returned interface's `finalize`.
    pub fn export(processor: Box<dyn Processor>) -> Self {
        let token = Box::into_raw(Box::new(processor)) as *mut c_void;
        Self {
            token,
            execute: Some(execute_exported),
            finalize: Some(finalize_exported),
        }
    }
}

/// Decode an execute status into the host's result type.
pub fn decode_status(name: &str, status: u32) -> Result<Handoff, ProcessorError> {
    match status {
        STATUS_PRODUCED => Ok(Handoff::Produced),
        STATUS_PASS_THROUGH => Ok(Handoff::PassThrough),
        STATUS_PANICKED => Err(ProcessorError::Panicked {
            processor: name.to_string(),
        }),
        STATUS_FAILED => Err(ProcessorError::Failed(format!(
            "{}: module reported failure",
            name
        ))),
        other => Err(ProcessorError::Failed(format!(
            "{}: module returned unknown status {}",
            name, other
        ))),
    }
}

/// Body of the `load` symbol generated by [`export_processor!`].
///
/// # Safety
/// `parameters` must point to a live [`Array`] and `interface` to writable
/// memory for a [`RawInterface`]; both may be null, which fails the load.
pub unsafe fn export_load(
    load: LoadFn,
    stage_index: u32,
    help_requested: bool,
    parameters: *const Array,
    interface: *mut RawInterface,
) -> bool {
    if parameters.is_null() || interface.is_null() {
        return false;
    }

    let ctx = LoadContext {
        stage_index,
        help_requested,
    };
    let parameters = &*parameters;

    match panic::catch_unwind(AssertUnwindSafe(|| load(&ctx, parameters))) {
        Ok(Ok(processor)) => {
            interface.write(RawInterface::export(processor));
            true
        }
        Ok(Err(error)) => {
            ModuleEntryFailed {
                entry: "load",
                error: &error,
            }
            .log();
            false
        }
        Err(_) => false,
    }
}

unsafe extern "C" fn execute_exported(
    stage_count: u32,
    help_requested: bool,
    input: *mut Dictionary,
    output: *mut Dictionary,
    token: *mut c_void,
) -> u32 {
    if input.is_null() || output.is_null() || token.is_null() {
        return STATUS_FAILED;
    }

    let processor = &mut *(token as *mut Box<dyn Processor>);
    let input = &mut *input;
    let output = &mut *output;
    let ctx = RunContext {
        stage_count,
        help_requested,
    };

    match panic::catch_unwind(AssertUnwindSafe(|| processor.execute(&ctx, input, output))) {
        Ok(Ok(Handoff::Produced)) => STATUS_PRODUCED,
        Ok(Ok(Handoff::PassThrough)) => STATUS_PASS_THROUGH,
        Ok(Err(error)) => {
            ModuleEntryFailed {
                entry: "execute",
                error: &error,
            }
            .log();
            STATUS_FAILED
        }
        Err(_) => STATUS_PANICKED,
    }
}

unsafe extern "C" fn finalize_exported(token: *mut c_void) {
    if token.is_null() {
        return;
    }

    let mut processor = Box::from_raw(token as *mut Box<dyn Processor>);
    // A panic here cannot be reported anywhere useful; the processor is
    // still dropped.
    let _ = panic::catch_unwind(AssertUnwindSafe(|| processor.finalize()));
    let _ = panic::catch_unwind(AssertUnwindSafe(move || drop(processor)));
}

/// Export a [`LoadFn`](crate::traits::LoadFn) as the module's C `load` symbol.
///
/// ```rust,ignore
/// atp::export_processor!(my_load);
/// ```
#[macro_export]
macro_rules! export_processor {
    ($load:path) => {
        /// Entry point looked up by the `atp` host.
        ///
        /// # Safety
        /// Called by the host with pointers it owns.
        #[export_name = "load"]
        pub unsafe extern "C" fn __atp_processor_load(
            stage_index: u32,
            help_requested: bool,
            parameters: *const $crate::record::Array,
            interface: *mut $crate::backends::loadable::abi::RawInterface,
        ) -> bool {
            $crate::backends::loadable::abi::export_load(
                $load,
                stage_index,
                help_requested,
                parameters,
                interface,
            )
        }
    };
}
