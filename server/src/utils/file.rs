//! Path helpers

use std::path::PathBuf;

/// Expand a user-supplied path to an absolute path.
///
/// `~` and `~/...` resolve against the home directory; relative paths and bare
/// names resolve against the current directory. Absolute paths pass through.
/// Components are kept as written, not canonicalized.
///
/// ```text
/// expand_path("~/.docket")    // -> /home/user/.docket
/// expand_path("./cases.db")   // -> /current/dir/./cases.db
/// expand_path("/var/lib/db")  // -> /var/lib/db
/// ```
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }

    let expanded = match path.strip_prefix('~') {
        Some("") => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => dirs::home_dir()
            .map(|home| home.join(&rest[1..]))
            .unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    };

    if expanded.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    } else {
        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_unchanged() {
        assert_eq!(
            expand_path("/var/lib/docket/docket.db"),
            PathBuf::from("/var/lib/docket/docket.db")
        );
    }

    #[test]
    fn test_relative_paths_become_absolute() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(expand_path("cases.db"), cwd.join("cases.db"));
        assert_eq!(expand_path(".."), cwd.join(".."));
        assert!(expand_path("./data/sqlite").ends_with("data/sqlite"));
    }

    #[test]
    fn test_tilde_expansion() {
        let result = expand_path("~/.docket");
        assert!(result.is_absolute());
        assert!(!result.to_string_lossy().contains('~'));
        assert!(result.ends_with(".docket"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~"), home);
        }
    }

    #[test]
    fn test_tilde_inside_name_is_literal() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(expand_path("~backup"), cwd.join("~backup"));
    }

    #[test]
    fn test_whitespace_trimmed_and_empty_is_cwd() {
        assert_eq!(expand_path("  /tmp/x  "), PathBuf::from("/tmp/x"));
        assert!(expand_path("   ").is_absolute());
    }
}
