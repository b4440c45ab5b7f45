//! Field-fallback resolution over loosely typed records.
//!
//! Nothing here fails: an absent, null, blank or wrongly typed field simply
//! does not match, and the caller's default applies.

use serde_json::Value;

use crate::RawRecord;

/// Sort key given to records that carry no usable order field.
pub const DEFAULT_SORT_KEY: i64 = 999;

/// Returns the first alias whose value can be read as display text.
///
/// Strings match when they contain non-whitespace; numbers are rendered in
/// their JSON form. Booleans, null, arrays and maps never match.
pub fn resolve_text<I, S>(record: &RawRecord, aliases: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aliases
        .into_iter()
        .find_map(|alias| record.get(alias.as_ref()).and_then(value_as_text))
}

pub fn resolve_text_or<I, S>(record: &RawRecord, aliases: I, default: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve_text(record, aliases).unwrap_or_else(|| default.to_string())
}

/// Returns the first alias whose value can be read as an integer.
///
/// Accepts JSON integers, finite floats (truncated toward zero) and strings
/// holding either.
pub fn resolve_number<I, S>(record: &RawRecord, aliases: I) -> Option<i64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aliases
        .into_iter()
        .find_map(|alias| record.get(alias.as_ref()).and_then(value_as_number))
}

pub fn resolve_sort_key<I, S>(record: &RawRecord, aliases: I) -> i64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve_number(record, aliases).unwrap_or(DEFAULT_SORT_KEY)
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn value_as_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>().ok().or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}
