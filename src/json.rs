use crate::core::Value;
use crate::error::CastError;

const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

/// Serialize a value to JSON text for saving a project.
///
/// Unlike a plain `JSON.stringify`, `Infinity`, `-Infinity` and `NaN` are
/// written as `0` rather than `null`, so every number slot in the output
/// still holds a number.
pub fn stringify(value: &Value) -> Result<String, CastError> {
    let json_value = value_to_json_value(value).unwrap_or(serde_json::Value::Null);
    let json_str = serde_json::to_string(&json_value)?;
    log::debug!("stringify produced: {}", json_str);
    Ok(json_str)
}

fn number_to_json_value(n: f64) -> serde_json::Value {
    if !n.is_finite() {
        return serde_json::Value::from(0);
    }
    if n == n.trunc() && n.abs() <= MAX_SAFE_INTEGER {
        // Integer; also folds -0 into 0
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or_else(|| serde_json::Value::from(0), serde_json::Value::Number)
}

/// `None` marks values that are skipped inside objects and become `null`
/// inside lists.
fn value_to_json_value(value: &Value) -> Option<serde_json::Value> {
    match value {
        Value::Undefined => None,
        Value::Null => Some(serde_json::Value::Null),
        Value::Boolean(b) => Some(serde_json::Value::Bool(*b)),
        Value::Number(n) => Some(number_to_json_value(*n)),
        Value::String(s) => Some(serde_json::Value::String(s.clone())),
        Value::List(items) => Some(serde_json::Value::Array(
            items
                .iter()
                .map(|item| value_to_json_value(item).unwrap_or(serde_json::Value::Null))
                .collect(),
        )),
        Value::Object(entries) => {
            let mut map = serde_json::Map::new();
            for (key, entry) in entries {
                if let Some(json_val) = value_to_json_value(entry) {
                    map.insert(key.clone(), json_val);
                }
            }
            Some(serde_json::Value::Object(map))
        }
    }
}
