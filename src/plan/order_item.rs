use serde::Serialize;

/// A sort key exactly as the producer phrased it.
///
/// The key can arrive in several forms; the compiler resolves it to an
/// output name, trying `name`, then `expr`, then the `column`/`agg` pair,
/// then `index`, and finally the first measure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Lower-cased direction, `asc` or `desc` once valid
    pub dir: String,
}

impl OrderItem {
    pub fn by_expr(expr: &str, dir: &str) -> Self {
        Self { expr: Some(expr.to_string()), dir: dir.to_string(), ..Default::default() }
    }

    pub fn by_name(name: &str, dir: &str) -> Self {
        Self { name: Some(name.to_string()), dir: dir.to_string(), ..Default::default() }
    }

    pub fn by_index(index: i64, dir: &str) -> Self {
        Self { index: Some(index), dir: dir.to_string(), ..Default::default() }
    }

    pub fn by_pair(column: &str, agg: &str, dir: &str) -> Self {
        Self {
            column: Some(column.to_string()),
            agg: Some(agg.to_string()),
            dir: dir.to_string(),
            ..Default::default()
        }
    }

    /// True when the item names its key in any of the accepted forms.
    pub fn has_reference(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.name)
            || present(&self.expr)
            || (present(&self.column) && present(&self.agg))
            || self.index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_form_counts_as_a_reference() {
        assert!(OrderItem::by_expr("Year", "asc").has_reference());
        assert!(OrderItem::by_name("avg_rating", "desc").has_reference());
        assert!(OrderItem::by_index(1, "desc").has_reference());
        assert!(OrderItem::by_pair("Rating", "avg", "desc").has_reference());
    }

    #[test]
    fn blank_or_partial_forms_do_not() {
        assert!(!OrderItem { dir: "desc".into(), ..Default::default() }.has_reference());
        assert!(!OrderItem::by_expr("  ", "desc").has_reference());
        let half_pair = OrderItem { column: Some("Rating".into()), dir: "asc".into(), ..Default::default() };
        assert!(!half_pair.has_reference());
    }

    #[test]
    fn serializes_only_present_forms() {
        let v = serde_json::to_value(OrderItem::by_index(0, "desc")).unwrap();
        assert_eq!(v, serde_json::json!({"index": 0, "dir": "desc"}));
    }
}
