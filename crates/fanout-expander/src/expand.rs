//! The expansion algorithm.
//!
//! Expansion works over a mapping document one level at a time:
//! 1. While the mapping has sequence-valued entries, each element of each
//!    such entry is substituted for the whole sequence and the resulting
//!    document is expanded again at the same depth.
//! 2. Once no sequence-valued entries remain, each mapping-valued entry is
//!    expanded one level deeper, consuming one unit of the depth budget.
//!
//! The budget is therefore charged per mapping descent, never per sequence
//! substitution: a depth of 1 fans out every sequence at the root but leaves
//! nested mappings untouched.

use fanout_core::{Mapping, Value};

/// Expand `doc` into its variant documents.
///
/// Returns one document per combination of substituted sequence elements and
/// descended mapping variants, in a deterministic order: mapping entries in
/// their insertion order, sequence elements in their sequence order, and
/// recursive output in the order the recursion produced it. Every returned
/// document is an independently owned copy; `doc` is never mutated.
///
/// When a mapping holds two or more sequence-valued entries, each entry is
/// substituted starting from the original mapping, so the full cross product
/// is reached once per entry processing order and the result contains
/// duplicates. Callers that want a clean cartesian product must deduplicate
/// themselves; this function reproduces every path.
///
/// `depth == 0` returns `vec![doc.clone()]` unconditionally, and a
/// non-mapping `doc` is returned unchanged at any depth.
///
/// # Example
///
/// ```
/// use fanout_core::Value;
/// use fanout_expander::expand;
///
/// let doc: Value = r#"{"host":"db1","port":[5432,5433]}"#.parse().unwrap();
/// let variants = expand(&doc, 1);
/// assert_eq!(variants[0].to_string(), r#"{"host":"db1","port":5432}"#);
/// assert_eq!(variants[1].to_string(), r#"{"host":"db1","port":5433}"#);
/// ```
pub fn expand(doc: &Value, depth: u32) -> Vec<Value> {
    if depth == 0 {
        return vec![doc.clone()];
    }
    let Value::Mapping(entries) = doc else {
        // Only mappings have fields to substitute into; a bare sequence or
        // scalar root passes through unchanged.
        return vec![doc.clone()];
    };

    let mut variants = Vec::new();
    if entries.values().any(Value::is_sequence) {
        substitute_sequence_entries(entries, depth, &mut variants);
    } else if entries.values().any(Value::is_mapping) {
        descend_mapping_entries(entries, depth, &mut variants);
    } else {
        variants.push(doc.clone());
    }
    variants
}

/// One variant per element of every sequence-valued entry, expanded again at
/// the same depth.
///
/// Each entry is substituted independently, starting from the original
/// mapping; the same-depth recursion picks up whatever sequence-valued
/// entries remain, including elements that are themselves sequences.
fn substitute_sequence_entries(entries: &Mapping, depth: u32, out: &mut Vec<Value>) {
    for (key, value) in entries {
        let Value::Sequence(elements) = value else {
            continue;
        };
        for element in elements {
            let mut rebound = entries.clone();
            // Inserting over an existing key keeps its position.
            rebound.insert(key.clone(), element.clone());
            out.extend(expand(&Value::Mapping(rebound), depth));
        }
    }
}

/// One variant per expansion of every mapping-valued entry, each charged one
/// unit of depth. Non-mapping values are opaque here; sequences were already
/// ruled out at this level.
fn descend_mapping_entries(entries: &Mapping, depth: u32, out: &mut Vec<Value>) {
    for (key, value) in entries {
        if !value.is_mapping() {
            continue;
        }
        for variant in expand(value, depth - 1) {
            let mut rebound = entries.clone();
            rebound.insert(key.clone(), variant);
            out.push(Value::Mapping(rebound));
        }
    }
}
