//! Filter value parsing
//!
//! Raw filter values arrive as `value1.value2~operator`: `.` separates the
//! values and the right-most `~` separates them from the operator token.

/// Values and operator token parsed from one raw filter string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitValue {
    pub values: Vec<String>,
    pub operator: Option<String>,
}

impl SplitValue {
    /// First value, used by single-value conditions
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }
}

/// Split a raw filter string into its values and operator.
///
/// Absent or empty input yields no values and no operator. Segments are kept
/// verbatim, so duplicates and empty segments survive.
pub fn split_filter_value(raw: Option<&str>) -> SplitValue {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return SplitValue::default();
    };

    let (values, operator) = match raw.rsplit_once('~') {
        Some((values, operator)) => (values, Some(operator.to_string())),
        None => (raw, None),
    };

    SplitValue {
        values: values.split('.').map(str::to_string).collect(),
        operator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_yields_nothing() {
        assert_eq!(split_filter_value(None), SplitValue::default());
        assert_eq!(split_filter_value(Some("")), SplitValue::default());
    }

    #[test]
    fn values_and_operator() {
        let split = split_filter_value(Some("a.b.c~like"));
        assert_eq!(split.values, vec!["a", "b", "c"]);
        assert_eq!(split.operator(), Some("like"));
    }

    #[test]
    fn no_operator() {
        let split = split_filter_value(Some("Open"));
        assert_eq!(split.values, vec!["Open"]);
        assert_eq!(split.operator(), None);
        assert_eq!(split.first(), Some("Open"));
    }

    #[test]
    fn splits_on_rightmost_tilde() {
        let split = split_filter_value(Some("a~b~eq"));
        assert_eq!(split.values, vec!["a~b"]);
        assert_eq!(split.operator(), Some("eq"));
    }

    #[test]
    fn segments_kept_verbatim() {
        let split = split_filter_value(Some("x..x~in"));
        assert_eq!(split.values, vec!["x", "", "x"]);
    }

    #[test]
    fn bare_operator_keeps_one_empty_value() {
        let split = split_filter_value(Some("~like"));
        assert_eq!(split.values, vec![""]);
        assert_eq!(split.operator(), Some("like"));
    }
}
