//! Quoted `"key": "value"` property lists used by the YARS-PG terms.
//!
//! Entries keep the attribute map's insertion order. Values are written with
//! their display form; embedded quotes are not escaped.

use crate::error::{GraphError, Result};
use crate::graph::PropertyMap;
use std::fmt::Write;

/// Format `attributes` as a comma-separated property list, skipping `exclude_key`.
///
/// Returns an empty string when no entries remain.
pub fn format_property_list(attributes: &PropertyMap, exclude_key: &str) -> Result<String> {
    let mut out = String::new();
    write_property_list(&mut out, attributes, exclude_key)?;
    Ok(out)
}

/// Stream the property list of `attributes` into `out`.
///
/// # Errors
///
/// Returns [`GraphError::Formatting`] naming the entry being written when the
/// sink fails.
pub fn write_property_list<W: Write>(
    out: &mut W,
    attributes: &PropertyMap,
    exclude_key: &str,
) -> Result<()> {
    let entries = attributes.iter().filter(|(key, _)| key.as_str() != exclude_key);
    for (index, (key, value)) in entries.enumerate() {
        let separator = if index == 0 { "" } else { ", " };
        write!(out, "{separator}\"{key}\": \"{value}\"")
            .map_err(|_| GraphError::formatting(key.as_str()))?;
    }
    Ok(())
}
