//! Credential file location.

use crate::constants;
use crate::util::path::expand_tilde;
use std::env;
use std::path::PathBuf;

/// Resolve the credential file from the CLI arg, `EDGERC`, or the default.
pub fn resolve_edgerc(arg: Option<PathBuf>) -> PathBuf {
    if let Some(path) = arg {
        return expand_tilde(&path);
    }
    match env::var("EDGERC") {
        Ok(path) if !path.is_empty() => expand_tilde(&PathBuf::from(path)),
        _ => expand_tilde(&PathBuf::from(constants::DEFAULT_EDGERC)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(
            resolve_edgerc(Some(PathBuf::from("/tmp/custom.edgerc"))),
            PathBuf::from("/tmp/custom.edgerc")
        );
    }

    #[test]
    fn test_default_is_not_tilde() {
        if env::var("EDGERC").is_err() && dirs::home_dir().is_some() {
            let resolved = resolve_edgerc(None);
            assert!(!resolved.to_string_lossy().starts_with('~'));
            assert!(resolved.ends_with(".edgerc"));
        }
    }
}
