//! Precision-safe order identifier handling

use serde_json::Value;

/// Normalizes an order identifier into its canonical trimmed base-10
/// string form.
///
/// Lighter keys orders by on-chain index, client index or plain id, and
/// the wire switches between string and numeric representations per
/// endpoint. Integer values render through their exact integer form; only
/// genuinely fractional numbers truncate toward zero. Returns `None` when
/// the value cannot name an order.
pub fn normalize_order_identity(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int.to_string());
            }
            if let Some(int) = number.as_u64() {
                return Some(int.to_string());
            }
            let float = number.as_f64()?;
            if !float.is_finite() {
                return None;
            }
            Some((float.trunc() as i128).to_string())
        }
        _ => None,
    }
}

/// Compares two identifier-like values by canonical string form.
///
/// Numeric comparison is never used: on-chain indices above 2^53 are not
/// exactly representable as floats, and two distinct indices must never
/// collapse into the same identifier.
pub fn order_identity_equals(a: &Value, b: &Value) -> bool {
    match (normalize_order_identity(a), normalize_order_identity(b)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn treats_large_numeric_strings_as_distinct_values() {
        let first = json!("27584547724798440");
        let second = json!("27584547724798442");
        assert!(!order_identity_equals(&first, &second));
        assert!(order_identity_equals(&first, &first));
    }

    #[test]
    fn considers_numeric_inputs_equal_to_their_string_counterparts() {
        assert!(order_identity_equals(&json!(123456789), &json!("123456789")));
    }

    #[test]
    fn normalizes_whitespace_only_identifiers_to_none() {
        assert_eq!(normalize_order_identity(&json!("   ")), None);
    }

    #[test]
    fn falls_back_to_truncated_integers_for_floating_inputs() {
        assert_eq!(normalize_order_identity(&json!(42.9)), Some("42".to_string()));
        assert_eq!(normalize_order_identity(&json!(-42.9)), Some("-42".to_string()));
    }

    #[test]
    fn preserves_integers_beyond_float_precision() {
        // 2^63 - 1 and nearby values collapse when routed through f64.
        let a = json!(9223372036854775807i64);
        let b = json!(9223372036854775806i64);
        assert!(!order_identity_equals(&a, &b));
        assert_eq!(
            normalize_order_identity(&a),
            Some("9223372036854775807".to_string())
        );
    }

    #[test]
    fn rejects_non_identifier_types() {
        assert_eq!(normalize_order_identity(&Value::Null), None);
        assert_eq!(normalize_order_identity(&json!(true)), None);
        assert_eq!(normalize_order_identity(&json!(["1"])), None);
    }

    #[test]
    fn trims_string_identifiers() {
        assert_eq!(
            normalize_order_identity(&json!("  42  ")),
            Some("42".to_string())
        );
    }
}
