//! SQL utility functions

/// Case-insensitive substring pattern for the SQLite `REGEXP` operator.
///
/// The value is matched literally. Case folding is Unicode-aware, so
/// `álvarez` finds `ÁLVAREZ`.
///
/// # Example
///
/// ```
/// use docket_server::utils::sql::contains_regex;
///
/// assert_eq!(contains_regex("Reyes v. Acme"), "(?i)Reyes v\\. Acme");
/// ```
pub fn contains_regex(s: &str) -> String {
    format!("(?i){}", regex::escape(s))
}

/// `?, ?, ?` placeholder list for an IN clause
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_contains_regex_is_literal() {
        assert_eq!(contains_regex("acme"), "(?i)acme");
        assert_eq!(contains_regex("100%_off"), "(?i)100%_off");

        let re = Regex::new(&contains_regex("a.c (x)")).unwrap();
        assert!(re.is_match("A.C (X) Holdings"));
        assert!(!re.is_match("abc (x)"));
    }

    #[test]
    fn test_contains_regex_folds_unicode() {
        let re = Regex::new(&contains_regex("álvarez v. peña")).unwrap();
        assert!(re.is_match("ÁLVAREZ v. PEÑA"));
        assert!(re.is_match("In re Álvarez v. Peña"));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
        assert_eq!(placeholders(0), "");
    }
}
