//! The merge core: recursive dispatch, array concatenation, key-wise
//! folding, and the public entry points.
//!
//! Every merge step classifies one `(merged, source)` pair into exactly one
//! of three actions, re-evaluated at every level of recursion:
//!
//! 1. **concat-arrays** — both sides are arrays and
//!    [`MergeOptions::concat_arrays`] is set: splice the source's elements
//!    after the accumulated ones.
//! 2. **key-wise merge** — both sides are records: fold the source's entries
//!    into the accumulated record, recursing on keys both sides own.
//! 3. **override-by-clone** — anything else: the source wins outright and is
//!    copied in whole. Later terminals (and arrays, when concatenation is
//!    off) fully replace whatever came before at that key.
//!
//! # Ownership
//!
//! The accumulated side is always an **owned** [`Value`] — either the entry
//! point's fresh accumulator or a value produced by earlier cloning or
//! recursion. Sources are only ever borrowed. Mutating the accumulator in
//! place is therefore safe by type, not by convention: no caller-visible
//! input can alias it.

use crate::error::{MergeError, Result};
use crate::options::MergeOptions;
use crate::value::{enumerated, Array, Key, Record, Value};

/// Deep-merge a sequence of record values, left to right, under default
/// options (arrays override).
///
/// `None` inputs are skipped without effect, mirroring absent arguments.
/// Every present input must be a [`Value::Record`]; anything else fails with
/// [`MergeError::InvalidInput`] and no result is produced. Inputs are never
/// mutated, and the result shares no record or array substructure with any
/// input.
///
/// The result is a fresh record on the base prototype, regardless of the
/// first input's prototype kind.
///
/// ```
/// use optmerge_core::{merge, Value};
/// use serde_json::json;
///
/// let base = Value::from_json(&json!({"retries": 2, "limits": {"cpu": 1}}));
/// let overlay = Value::from_json(&json!({"limits": {"mem": 512}}));
///
/// let merged = merge([Some(&base), None, Some(&overlay)]).unwrap();
/// assert_eq!(
///     merged.to_json(),
///     json!({"retries": 2, "limits": {"cpu": 1, "mem": 512}}),
/// );
/// ```
pub fn merge<'a, I>(inputs: I) -> Result<Record>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    merge_with(&MergeOptions::default(), inputs)
}

/// Deep-merge a sequence of record values under explicit options.
///
/// Behaves as [`merge`], with array policy taken from `options`.
///
/// ```
/// use optmerge_core::{merge_with, MergeOptions, Value};
/// use serde_json::json;
///
/// let a = Value::from_json(&json!({"tags": ["a", "b"]}));
/// let b = Value::from_json(&json!({"tags": ["c"]}));
///
/// let opts = MergeOptions { concat_arrays: true };
/// let merged = merge_with(&opts, [Some(&a), Some(&b)]).unwrap();
/// assert_eq!(merged.to_json(), json!({"tags": ["a", "b", "c"]}));
/// ```
pub fn merge_with<'a, I>(options: &MergeOptions, inputs: I) -> Result<Record>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    let mut merged = Record::new();
    for input in inputs {
        let Some(input) = input else {
            continue;
        };
        match input {
            Value::Record(source) => merge_record_into(&mut merged, source, options),
            other => return Err(MergeError::InvalidInput(other.to_string())),
        }
    }
    Ok(merged)
}

/// One step of the recursive core.
///
/// `merged` is the owned accumulated value; `source` is the borrowed input
/// being folded in. Returns the merged value for this position.
pub(crate) fn merge_values(merged: Value, source: &Value, options: &MergeOptions) -> Value {
    match (merged, source) {
        (Value::Array(merged), Value::Array(source)) if options.concat_arrays => {
            Value::Array(concat_arrays(merged, source, options))
        }
        (Value::Record(mut merged), Value::Record(source)) => {
            merge_record_into(&mut merged, source, options);
            Value::Record(merged)
        }
        // Either side is not a merge target: the source overrides in whole.
        (_, source) => source.clone(),
    }
}

/// Fold a source record's entries into an owned record, key by key.
fn merge_record_into(merged: &mut Record, source: &Record, options: &MergeOptions) {
    merge_entry_list(merged.entries_mut(), source.enumerated_entries(), options);
}

/// The key merger: fold source entries into an owned entry list.
///
/// Source entries arrive in enumeration order (names first, then symbols).
/// A key the owned side already holds keeps its position and its value is
/// merged recursively; a new key appends a copy of the source value.
///
/// Records and array named-entries share this routine — non-index array
/// keys merge under exactly the record policy.
fn merge_entry_list<'s>(
    entries: &mut Vec<(Key, Value)>,
    source_entries: impl Iterator<Item = (&'s Key, &'s Value)>,
    options: &MergeOptions,
) {
    for (key, source_value) in source_entries {
        match entries.iter_mut().find(|entry| entry.0 == *key) {
            Some(entry) => {
                // Take the old value out, merge, and put the result back.
                let previous = std::mem::replace(&mut entry.1, Value::Null);
                entry.1 = merge_values(previous, source_value, options);
            }
            None => entries.push((key.clone(), source_value.clone())),
        }
    }
}

/// Concatenate two arrays end-to-end, then merge their non-index keys.
///
/// `merged`'s present elements are moved over as-is (they are already owned
/// by the fold); `source`'s present elements are copied. Holes contribute
/// nothing — only own indices are carried, so the result is dense. Named
/// entries merge afterwards under the key-merger policy, `merged`'s first,
/// then `source`'s.
fn concat_arrays(merged: Array, source: &Array, options: &MergeOptions) -> Array {
    let (merged_slots, merged_named) = merged.into_parts();

    let mut result = Array::new();
    for value in merged_slots.into_iter().flatten() {
        result.push(value);
    }
    for value in source.values() {
        result.push(value.clone());
    }

    merge_entry_list(result.named_mut(), enumerated(&merged_named), options);
    merge_entry_list(result.named_mut(), source.named_entries(), options);
    result
}
