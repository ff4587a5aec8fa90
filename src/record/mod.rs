// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The record model passed between pipeline stages.
//!
//! A record is a [`Dictionary`] of [`Value`]s. Values are an owned tree:
//! nested dictionaries and arrays belong to exactly one parent, cloning is a
//! deep copy and dropping a value releases everything beneath it.
//!
//! # Example
//!
//! ```rust
//! use atp::record::{Array, Dictionary};
//!
//! let mut tags = Array::new();
//! tags.push("alpha").unwrap();
//!
//! let mut record = Dictionary::new();
//! record.set("count", 3u64).unwrap();
//! record.set("tags", tags).unwrap();
//!
//! assert_eq!(record.get::<u64>("count"), Ok(3));
//! assert_eq!(record.get::<&Array>("tags").unwrap().len(), 1);
//! ```

mod array;
mod dictionary;
pub mod json;
mod value;

pub use array::Array;
pub use dictionary::{Cursor, Dictionary, MAX_KEY_LEN};
pub use value::{FromValue, Value, ValueType};
