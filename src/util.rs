use crate::error::RatingResult;
use serde::Serialize;
use serde_json::{Number, Value};
use std::fs;
use std::path::Path;

/// Rounds to `places` decimals, halves away from zero.
///
/// Scales first, so `0.45 / 3` (just under 0.15) gives 0.1 while an exact
/// 0.25 gives 0.3.
pub fn round_decimal(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Length of the shortest round-trip rendering, integral values keeping
/// their `.0` suffix.
pub fn literal_len(value: f64) -> usize {
    format!("{:?}", value).len()
}

/// Pretty JSON with every object's keys sorted, integral numbers written
/// without a fractional part and a trailing newline.
pub fn to_canonical_json<T: Serialize>(value: &T) -> RatingResult<String> {
    // serde_json's default `Map` is ordered, so the round trip through
    // `Value` sorts keys at every level.
    let mut value = serde_json::to_value(value)?;
    compact_numbers(&mut value);
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

/// Writes [`to_canonical_json`] output, creating parent directories.
pub fn write_canonical_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> RatingResult<()> {
    let json = to_canonical_json(value)?;
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;
    Ok(())
}

const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

fn compact_numbers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
                if f.fract() == 0.0 && f.abs() < MAX_EXACT_INT {
                    *n = Number::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(compact_numbers),
        Value::Object(map) => map.values_mut().for_each(compact_numbers),
        _ => {}
    }
}
