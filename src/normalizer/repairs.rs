use once_cell::sync::Lazy;
use regex::Regex;

/// Keys the validator reads at the top level of a plan.
pub const PLAN_KEYS: [&str; 7] = ["table", "intent", "dimensions", "measures", "filters", "order_by", "limit"];

static CONDITIONAL_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bCASE\s+WHEN\b").expect("conditional pattern is valid")
});

/// Map a top-level key to its canonical spelling: case variants of the plan
/// keys, plus `order` for `order_by`.
pub fn canonical_plan_key(key: &str) -> Option<&'static str> {
    let lower = key.to_ascii_lowercase();
    if lower == "order" {
        return Some("order_by");
    }
    PLAN_KEYS.iter().copied().find(|k| *k == lower)
}

/// Informal operator spellings become their SQL form; everything else is
/// upper-cased and left for the validator to accept or reject.
pub fn repair_operator(op: &str) -> String {
    match op.to_lowercase().as_str() {
        "gte" => ">=".to_string(),
        "lte" => "<=".to_string(),
        "in" => "IN".to_string(),
        "between" => "BETWEEN".to_string(),
        _ => op.to_uppercase(),
    }
}

/// Heuristic for a measure column that is really a `CASE WHEN ...` expression.
///
/// This only recognises that one shape; it does not interpret expressions.
pub fn looks_like_conditional(column: &str) -> bool {
    CONDITIONAL_EXPR.is_match(column)
}
