use serde::Serialize;

/// What the producer meant the plan to do. Informational only; it never changes the compiled shape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Aggregate,
    Select,
    TopK,
}

impl Intent {
    pub fn parse(text: &str) -> Option<Intent> {
        match text.trim().to_ascii_lowercase().as_str() {
            "aggregate" => Some(Intent::Aggregate),
            "select" => Some(Intent::Select),
            "topk" => Some(Intent::TopK),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Intent::parse("TopK"), Some(Intent::TopK));
        assert_eq!(Intent::parse(" select "), Some(Intent::Select));
        assert_eq!(Intent::parse("delete"), None);
    }

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(serde_json::to_value(Intent::TopK).unwrap(), "topk");
        assert_eq!(serde_json::to_value(Intent::default()).unwrap(), "aggregate");
    }
}
