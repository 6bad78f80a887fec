//! Symbol-form reconciliation across notation variants

/// Expands a symbol into its recognized normalized forms: the uppercased
/// original, the alphanumeric-only uppercase, and the base segment before
/// the first separator. "BTC-USD", "BTCUSD" and "BTC/USD:PERP" all share
/// at least one form.
pub fn normalize_symbol_forms(value: &str) -> Vec<String> {
    let upper = value.to_uppercase();
    let sanitized: String = upper
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let base = upper
        .split(['-', ':', '/'])
        .find(|part| !part.is_empty())
        .unwrap_or("")
        .to_string();
    let mut forms: Vec<String> = Vec::new();
    for form in [upper, sanitized, base] {
        if !form.is_empty() && !forms.contains(&form) {
            forms.push(form);
        }
    }
    forms
}

/// True when two symbols denote the same market despite notation
/// differences between the Lighter and Aster sides: equivalent iff their
/// normalized form sets intersect.
pub fn symbols_match(source: Option<&str>, target: Option<&str>) -> bool {
    let (Some(source), Some(target)) = (source, target) else {
        return false;
    };
    if source.is_empty() || target.is_empty() {
        return false;
    }
    let source_forms = normalize_symbol_forms(source);
    let target_forms = normalize_symbol_forms(target);
    if source_forms.is_empty() || target_forms.is_empty() {
        return false;
    }
    source_forms
        .iter()
        .any(|form| target_forms.contains(form))
}
