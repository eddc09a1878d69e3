//! Merge configuration.
//!
//! Configuration is plain immutable data: a struct with explicit defaults.
//! Partial override is ordinary struct update over [`MergeOptions::default`],
//! and `#[serde(default)]` gives serialized configuration the same
//! missing-fields-take-defaults behavior.

use serde::{Deserialize, Serialize};

/// Options controlling array-merge policy.
///
/// ```
/// use optmerge_core::MergeOptions;
///
/// let defaults = MergeOptions::default();
/// assert!(!defaults.concat_arrays);
///
/// // Partial override: name the fields you change.
/// let concat = MergeOptions { concat_arrays: true, ..MergeOptions::default() };
/// assert!(concat.concat_arrays);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeOptions {
    /// When true, two arrays meeting at the same key concatenate end-to-end
    /// instead of the later one replacing the earlier one.
    pub concat_arrays: bool,
}

impl MergeOptions {
    /// Options with array concatenation switched on.
    pub fn concatenating() -> Self {
        MergeOptions {
            concat_arrays: true,
        }
    }
}
