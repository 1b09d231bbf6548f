//! Home-relative path handling.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and `~user` forms, are returned as-is.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    let rest = match text.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return path.to_path_buf(),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_path_untouched() {
        assert_eq!(expand_tilde(Path::new("/etc/edgerc")), PathBuf::from("/etc/edgerc"));
        assert_eq!(expand_tilde(Path::new("rel/edgerc")), PathBuf::from("rel/edgerc"));
    }

    #[test]
    fn test_expand_other_user_untouched() {
        assert_eq!(expand_tilde(Path::new("~bob/.edgerc")), PathBuf::from("~bob/.edgerc"));
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/.edgerc")), home.join(".edgerc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
