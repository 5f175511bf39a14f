//! Query-string encoding for read operations.
//!
//! Parameters are serialized to a JSON object first, then flattened into
//! `(key, value)` pairs: strings pass through, numbers and booleans use their
//! string form, arrays repeat the key once per element and `null` (an unset
//! `Option`) is dropped. Field order follows the parameter struct.

use serde::Serialize;
use serde_json::Value;

pub fn encode_query<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>, String> {
    let value = serde_json::to_value(params).map_err(|e| e.to_string())?;
    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(format!(
                "query parameters must serialize to an object, got {}",
                other
            ));
        }
    };

    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::Null => {}
            Value::Array(elements) => {
                for element in elements {
                    if let Some(text) = scalar_to_string(element) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            scalar => {
                if let Some(text) = scalar_to_string(scalar) {
                    pairs.push((key, text));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
