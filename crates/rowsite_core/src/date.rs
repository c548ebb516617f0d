use chrono::{LocalResult, TimeZone, Utc};
use serde_json::Value;

/// Best-effort normalization of a timestamp-like scalar to `YYYY-MM-DD` UTC.
///
/// The raw value is stringified, ASCII commas (thousands separators) are
/// stripped, and the result is parsed as a float and truncated to whole
/// seconds since the Unix epoch. Anything that does not parse, or falls
/// outside chrono's representable range, is returned as the original string.
/// Never errors; `None`/null render as an empty string.
pub fn timestamp_to_date(value: Option<&Value>) -> String {
    let raw = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    let cleaned = raw.replace(',', "");
    let Ok(num) = cleaned.parse::<f64>() else {
        return raw;
    };
    if !num.is_finite() {
        return raw;
    }
    match Utc.timestamp_opt(num.trunc() as i64, 0) {
        LocalResult::Single(datetime) => datetime.format("%Y-%m-%d").to_string(),
        _ => raw,
    }
}
