use serde::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Render a sheet cell as text. Integral numbers lose their fractional part
/// so that a code stored as `7.0` reads back as `"7"`.
pub fn cell_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                let f = n.as_f64()?;
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    Some(format!("{}", f as i64))
                } else {
                    Some(f.to_string())
                }
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// `deserialize_with` helper for optional text cells that may arrive as
/// strings, numbers or null.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(cell_to_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_to_text() {
        assert_eq!(cell_to_text(&json!("07")), Some("07".to_string()));
        assert_eq!(cell_to_text(&json!(7)), Some("7".to_string()));
        assert_eq!(cell_to_text(&json!(7.0)), Some("7".to_string()));
        assert_eq!(cell_to_text(&json!(7.5)), Some("7.5".to_string()));
        assert_eq!(cell_to_text(&json!(null)), None);
        assert_eq!(cell_to_text(&json!([1, 2])), None);
    }
}
