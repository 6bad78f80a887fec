//! Boolean flag coercion for loosely-typed wire values

use serde_json::Value;

const TRUE_VALUES: [&str; 5] = ["1", "true", "yes", "y", "on"];
const FALSE_VALUES: [&str; 5] = ["0", "false", "no", "n", "off"];

/// Interprets a wire value as a boolean without trusting its declared type.
///
/// Lighter emits boolean-like fields as native booleans, numbers, big
/// integers or token strings depending on the endpoint. Returns `None`
/// when the value cannot be read as a boolean; the caller decides the
/// fallback.
pub fn normalize_boolean_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return match int {
                    1 => Some(true),
                    0 => Some(false),
                    _ => None,
                };
            }
            if number.as_u64().is_some() {
                // Above i64::MAX, so neither 0 nor 1.
                return None;
            }
            match number.as_f64() {
                Some(float) if float == 1.0 => Some(true),
                Some(float) if float == 0.0 => Some(false),
                _ => None,
            }
        }
        Value::String(raw) => {
            let normalized = raw.trim().to_lowercase();
            if normalized.is_empty() {
                return None;
            }
            if TRUE_VALUES.contains(&normalized.as_str()) {
                return Some(true);
            }
            if FALSE_VALUES.contains(&normalized.as_str()) {
                return Some(false);
            }
            None
        }
        _ => None,
    }
}

/// Applies [`normalize_boolean_flag`], substituting `fallback` when the
/// value is unrecognized.
pub fn coerce_boolean_flag(value: &Value, fallback: bool) -> bool {
    normalize_boolean_flag(value).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn passes_native_booleans_through() {
        assert_eq!(normalize_boolean_flag(&json!(true)), Some(true));
        assert_eq!(normalize_boolean_flag(&json!(false)), Some(false));
    }

    #[test]
    fn maps_numeric_one_and_zero() {
        assert_eq!(normalize_boolean_flag(&json!(1)), Some(true));
        assert_eq!(normalize_boolean_flag(&json!(0)), Some(false));
        assert_eq!(normalize_boolean_flag(&json!(1.0)), Some(true));
        assert_eq!(normalize_boolean_flag(&json!(2)), None);
        assert_eq!(normalize_boolean_flag(&json!(-1)), None);
        assert_eq!(normalize_boolean_flag(&json!(u64::MAX)), None);
    }

    #[test]
    fn matches_token_strings_case_insensitively() {
        assert_eq!(normalize_boolean_flag(&json!("Yes")), Some(true));
        assert_eq!(normalize_boolean_flag(&json!(" on ")), Some(true));
        assert_eq!(normalize_boolean_flag(&json!("No")), Some(false));
        assert_eq!(normalize_boolean_flag(&json!("OFF")), Some(false));
        assert_eq!(normalize_boolean_flag(&json!("maybe")), None);
        assert_eq!(normalize_boolean_flag(&json!("")), None);
        assert_eq!(normalize_boolean_flag(&json!("  ")), None);
    }

    #[test]
    fn rejects_other_types() {
        assert_eq!(normalize_boolean_flag(&Value::Null), None);
        assert_eq!(normalize_boolean_flag(&json!([1])), None);
        assert_eq!(normalize_boolean_flag(&json!({"flag": true})), None);
    }

    #[test]
    fn coercion_applies_fallback() {
        assert!(coerce_boolean_flag(&json!("Yes"), false));
        assert!(!coerce_boolean_flag(&json!("No"), true));
        assert!(!coerce_boolean_flag(&json!("maybe"), false));
        assert!(coerce_boolean_flag(&Value::Null, true));
    }
}
