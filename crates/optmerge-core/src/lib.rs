//! # optmerge-core
//!
//! Deep, non-destructive merge of ordered record trees ("option objects").
//!
//! Folds a left-to-right sequence of record values into one fresh record:
//! overlapping record keys merge recursively, terminals take the later
//! value, and arrays either override (default) or concatenate
//! ([`MergeOptions::concat_arrays`]). No input is ever mutated, and the
//! result shares no record or array substructure with any input — only
//! opaque terminal payloads are carried by reference, because they are
//! atomic to the engine.
//!
//! ## Quick start
//!
//! ```rust
//! use optmerge_core::{merge, Value};
//! use serde_json::json;
//!
//! let defaults = Value::from_json(&json!({"retries": 2, "limits": {"cpu": 1}}));
//! let overrides = Value::from_json(&json!({"retries": 5, "limits": {"mem": 512}}));
//!
//! let merged = merge([Some(&defaults), Some(&overrides)]).unwrap();
//! assert_eq!(
//!     merged.to_json(),
//!     json!({"retries": 5, "limits": {"cpu": 1, "mem": 512}}),
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the closed data model: [`Value`], [`Record`], [`Array`],
//!   [`Key`]/[`Symbol`], [`Opaque`], [`Prototype`]
//! - [`merge`](mod@merge) — recursive dispatch, array concatenation, entry points
//! - [`options`] — [`MergeOptions`] configuration
//! - [`json`] — `serde_json` interop for JSON-borne option trees
//! - [`error`] — [`MergeError`]

pub mod error;
pub mod json;
pub mod merge;
pub mod options;
pub mod value;

pub use error::{MergeError, Result};
pub use merge::{merge, merge_with};
pub use options::MergeOptions;
pub use value::{Array, Key, Opaque, Prototype, Record, Symbol, Value, ValueKind};
