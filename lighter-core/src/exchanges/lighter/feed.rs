//! Reset-vs-merge decision for incremental order feed updates

use serde_json::Value;

/// Decides whether a per-market update must replace the cached open
/// orders for that market before its contents are applied.
///
/// A snapshot is authoritative and always replaces the cache. For
/// incremental updates, an explicitly empty bucket (array or keyed map)
/// means every order on the market is closed; a missing bucket means no
/// order change was delivered and must not wipe existing state.
pub fn should_reset_market_orders(bucket: Option<&Value>, is_snapshot: bool) -> bool {
    if is_snapshot {
        return true;
    }
    match bucket {
        None | Some(Value::Null) => false,
        Some(Value::Array(entries)) => entries.is_empty(),
        Some(Value::Object(entries)) => entries.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn always_resets_on_snapshots() {
        assert!(should_reset_market_orders(Some(&json!([{"id": 1}])), true));
        assert!(should_reset_market_orders(Some(&json!([])), true));
        assert!(should_reset_market_orders(Some(&Value::Null), true));
        assert!(should_reset_market_orders(None, true));
    }

    #[test]
    fn resets_when_array_bucket_is_empty() {
        assert!(should_reset_market_orders(Some(&json!([])), false));
        assert!(!should_reset_market_orders(Some(&json!([{}])), false));
    }

    #[test]
    fn resets_when_object_bucket_has_no_keys() {
        assert!(should_reset_market_orders(Some(&json!({})), false));
        assert!(!should_reset_market_orders(Some(&json!({"a": 1})), false));
    }

    #[test]
    fn does_not_reset_for_non_empty_or_absent_updates() {
        assert!(!should_reset_market_orders(
            Some(&json!([{"order_index": "1"}])),
            false
        ));
        assert!(!should_reset_market_orders(Some(&Value::Null), false));
        assert!(!should_reset_market_orders(None, false));
    }

    #[test]
    fn scalar_buckets_never_reset() {
        assert!(!should_reset_market_orders(Some(&json!(0)), false));
        assert!(!should_reset_market_orders(Some(&json!("")), false));
    }
}
