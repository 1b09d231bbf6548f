//! Reading, writing and reshaping the credential file.
//!
//! Every operation loads the whole file, changes it in memory, and writes it
//! back as a full replacement. The file is not locked; concurrent writers
//! race and the last rename wins.

use crate::constants;
use crate::core::ini;
use crate::error::{Error, Result};
use crate::models::config_file::ConfigFile;
use crate::models::profile::{CredentialProfile, RedactedProfile};
use crate::util::fs as edgerc_fs;
use std::path::Path;
use tracing::{debug, info};

/// How pasted sections combine with what is already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteMode {
    /// Field-merge each pasted section into the existing one.
    #[default]
    Merge,
    /// Replace each pasted section whole; other sections are kept.
    ReplaceSection,
    /// Discard the existing file content entirely.
    ReplaceFile,
}

fn require_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::invalid("Invalid File Name parameter"));
    }
    Ok(())
}

/// Empty or missing section names fall back to `default`.
pub fn section_or_default(section: Option<&str>) -> &str {
    match section {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => constants::DEFAULT_SECTION,
    }
}

/// Make sure the file exists without touching existing content.
pub async fn create_if_absent(path: &Path) -> Result<()> {
    require_path(path)?;
    tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| Error::io("create credential file", path, e))?;
    Ok(())
}

pub async fn read(path: &Path) -> Result<ConfigFile> {
    require_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io("read credential file", path, e))?;
    let config = ini::parse(&content)?;
    debug!(path = %path.display(), sections = config.len(), "loaded credential file");
    Ok(config)
}

pub async fn read_section(path: &Path, section: &str) -> Result<Option<CredentialProfile>> {
    let mut config = read(path).await?;
    Ok(config.remove(section))
}

/// Replace the file with `content`, quotes stripped.
///
/// The new content goes to a temp file in the same directory which is then
/// renamed over the target.
pub async fn write(path: &Path, content: &str) -> Result<()> {
    require_path(path)?;
    let content = edgerc_fs::strip_quotes(content);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = tempfile::Builder::new()
        .prefix(".edgerc-")
        .tempfile_in(dir)
        .map_err(|e| Error::io("create temp file in", dir, e))?
        .into_temp_path();
    tokio::fs::write(&tmp, content.as_bytes())
        .await
        .map_err(|e| Error::io("write temp credential file", &tmp, e))?;
    edgerc_fs::set_permissions(&tmp, constants::EDGERC_FILE_MODE)?;
    tmp.persist(path)
        .map_err(|e| Error::io("replace credential file", path, e.error))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote credential file");
    Ok(())
}

pub async fn save(path: &Path, config: &ConfigFile) -> Result<()> {
    write(path, &ini::serialize(config)).await
}

/// Fold `incoming` into one section of `config`.
///
/// With `overwrite_whole` the section becomes exactly `incoming`; otherwise
/// fields are merged and `incoming` wins. Other sections are untouched.
pub fn merge(
    config: &mut ConfigFile,
    section: Option<&str>,
    incoming: &CredentialProfile,
    overwrite_whole: bool,
) {
    let section = section_or_default(section);
    if overwrite_whole {
        config.insert(section, incoming.clone());
    } else if !incoming.is_empty() {
        config.entry(section).merge_from(incoming);
    }
}

/// Duplicate the profile at `from` into `to` as an independent value.
pub fn copy_section(config: &mut ConfigFile, from: &str, to: &str) -> Result<()> {
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(Error::invalid("Invalid parameters from and to"));
    }
    let profile = config
        .get(from)
        .cloned()
        .ok_or_else(|| Error::NotFound(from.to_string()))?;
    config.insert(to, profile);
    Ok(())
}

/// Add pasted credential blocks to the file.
///
/// Keys before any header belong to `section`. Returns the names of the
/// sections that were written.
pub async fn paste(
    path: &Path,
    section: Option<&str>,
    block: &str,
    mode: PasteMode,
) -> Result<Vec<String>> {
    require_path(path)?;
    let mut incoming = ini::parse(block)?;
    let root = incoming.take_root();
    if !root.is_empty() {
        incoming.entry(section_or_default(section)).merge_from(&root);
    }
    if incoming.iter().all(|(_, profile)| profile.is_empty()) {
        return Err(Error::invalid("Invalid set of new Options parameter"));
    }

    create_if_absent(path).await?;
    let mut config = match mode {
        PasteMode::ReplaceFile => ConfigFile::new(),
        PasteMode::Merge | PasteMode::ReplaceSection => read(path).await?,
    };
    let mut written = Vec::new();
    for (name, profile) in incoming.iter() {
        if profile.is_empty() {
            continue;
        }
        merge(&mut config, Some(name), profile, mode == PasteMode::ReplaceSection);
        written.push(name.to_string());
    }
    save(path, &config).await?;
    info!(path = %path.display(), sections = ?written, ?mode, "pasted credentials");
    Ok(written)
}

/// Store a complete profile under `section`, replacing what was there.
pub async fn setup(path: &Path, section: Option<&str>, profile: &CredentialProfile) -> Result<()> {
    require_path(path)?;
    profile.validate(true)?;
    let section = section_or_default(section);

    create_if_absent(path).await?;
    let mut config = read(path).await?;
    let fresh: CredentialProfile = constants::SETUP_FIELD_ORDER
        .iter()
        .map(|field| (*field, profile.get(field).unwrap_or_default().trim()))
        .collect();
    config.insert(section, fresh);
    save(path, &config).await?;
    info!(path = %path.display(), section, "stored credentials");
    Ok(())
}

pub async fn copy(path: &Path, from: &str, to: &str) -> Result<()> {
    require_path(path)?;
    let mut config = read(path).await?;
    copy_section(&mut config, from, to)?;
    save(path, &config).await?;
    info!(path = %path.display(), from, to, "copied section");
    Ok(())
}

/// Section names with their non-secret details, in file order.
pub async fn list(path: &Path) -> Result<Vec<(String, RedactedProfile)>> {
    let config = read(path).await?;
    Ok(config
        .iter()
        .map(|(name, profile)| (name.to_string(), profile.redacted()))
        .collect())
}
