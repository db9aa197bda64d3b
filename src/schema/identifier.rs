use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

/// True when `name` can be written into statement text without quoting.
pub fn is_plain_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(is_plain_identifier("EmpID"));
        assert!(is_plain_identifier("_tmp"));
        assert!(is_plain_identifier("avg_rating_2"));
    }

    #[test]
    fn rejects_anything_that_needs_quoting() {
        for bad in ["", "1col", "a b", "a;DROP TABLE x", "a.b", "x--", "\"q\"", "é"] {
            assert!(!is_plain_identifier(bad), "{bad:?} should be rejected");
        }
    }
}
