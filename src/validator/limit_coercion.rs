use serde_json::Value;

use crate::schema::PlanConfig;

/// Turn whatever the producer sent as `limit` into a value in `[1, max_limit]`.
///
/// Empty-ish values (`null`, `""`, `0`, `"0"`, `false`, `[]`, `{}`) and
/// anything that does not read as an integer fall back to the default.
/// Floats truncate toward zero; `true` reads as 1.
pub fn coerce_limit(value: Option<&Value>, config: &PlanConfig) -> i64 {
    match value.and_then(read_integer) {
        Some(n) => {
            let n = n.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
            config.clamp_limit(n)
        }
        None => config.default_limit(),
    }
}

fn read_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(i128::from(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i128::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(i128::from(u))
            } else {
                n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i128)
            }
        }
        Value::String(s) => parse_integer_text(s.trim()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_integer_text(text: &str) -> Option<i128> {
    if let Ok(n) = text.parse::<i128>() {
        return Some(n);
    }
    // too many digits for i128: only the sign matters once clamped
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Some(if text.starts_with('-') { i128::MIN } else { i128::MAX });
    }
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn coerce(value: Value) -> i64 {
        coerce_limit(Some(&value), &PlanConfig::default())
    }

    #[test]
    fn empty_like_values_use_default() {
        for v in [json!(null), json!(""), json!(0), json!("0"), json!(false), json!([]), json!({})] {
            assert_eq!(coerce(v.clone()), 100, "{v}");
        }
        assert_eq!(coerce_limit(None, &PlanConfig::default()), 100);
    }

    #[test]
    fn unparseable_values_use_default() {
        assert_eq!(coerce(json!("ten")), 100);
        assert_eq!(coerce(json!("10.5")), 100);
        assert_eq!(coerce(json!([10])), 100);
    }

    #[test]
    fn below_one_resets_instead_of_clamping() {
        assert_eq!(coerce(json!(-5)), 100);
        assert_eq!(coerce(json!("-1")), 100);
        assert_eq!(coerce(json!(0.5)), 100);
    }

    #[test]
    fn above_max_clamps() {
        assert_eq!(coerce(json!(5000)), 1000);
        assert_eq!(coerce(json!(u64::MAX)), 1000);
        assert_eq!(coerce(json!("99999999999999999999999999999999999999999999")), 1000);
        assert_eq!(coerce(json!(1e300)), 1000);
    }

    #[test]
    fn valid_values_pass_through() {
        assert_eq!(coerce(json!(10)), 10);
        assert_eq!(coerce(json!(" 25 ")), 25);
        assert_eq!(coerce(json!(7.9)), 7);
        assert_eq!(coerce(json!(true)), 1);
        assert_eq!(coerce(json!(1000)), 1000);
    }

    #[test]
    fn configured_limits_never_escape_the_hard_range() {
        let config = PlanConfig::default().with_limits(5000, 20000);
        assert_eq!(coerce_limit(Some(&json!(-5)), &config), 1000);
        assert_eq!(coerce_limit(None, &config), 1000);
        assert_eq!(coerce_limit(Some(&json!(15000)), &config), 1000);

        let config = PlanConfig::default().with_limits(0, 0);
        assert_eq!(coerce_limit(Some(&json!(-5)), &config), 1);
        assert_eq!(coerce_limit(Some(&json!("abc")), &config), 1);
    }
}
