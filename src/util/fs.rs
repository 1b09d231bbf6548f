use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

pub fn set_permissions(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        let perm = fs::Permissions::from_mode(mode);
        fs::set_permissions(path, perm)
            .map_err(|e| Error::io(&format!("set permissions {:o} on", mode), path, e))?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}

/// Remove every single and double quote character.
pub fn strip_quotes(content: &str) -> String {
    content.chars().filter(|c| *c != '"' && *c != '\'').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("host = \"a'b\"\n"), "host = ab\n");
        assert_eq!(strip_quotes("plain"), "plain");
    }

    #[cfg(unix)]
    #[test]
    fn test_set_permissions() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("edgerc");
        fs::write(&path, "").unwrap();
        set_permissions(&path, 0o600).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
