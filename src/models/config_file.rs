//! In-memory model of the whole credential file.

use crate::models::profile::CredentialProfile;

/// Keys before the first header, then sections in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    root: CredentialProfile,
    sections: Vec<(String, CredentialProfile)>,
}

impl ConfigFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys that precede every `[section]` header.
    pub fn root(&self) -> &CredentialProfile {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut CredentialProfile {
        &mut self.root
    }

    pub fn take_root(&mut self) -> CredentialProfile {
        std::mem::take(&mut self.root)
    }

    pub fn get(&self, name: &str) -> Option<&CredentialProfile> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CredentialProfile> {
        self.sections
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Return the section, appending an empty one if absent.
    pub fn entry(&mut self, name: &str) -> &mut CredentialProfile {
        let idx = match self.sections.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                self.sections.push((name.to_string(), CredentialProfile::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx].1
    }

    /// Replace or append a section wholesale.
    pub fn insert(&mut self, name: &str, profile: CredentialProfile) {
        *self.entry(name) = profile;
    }

    pub fn remove(&mut self, name: &str) -> Option<CredentialProfile> {
        let idx = self.sections.iter().position(|(n, _)| n == name)?;
        Some(self.sections.remove(idx).1)
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CredentialProfile)> {
        self.sections.iter().map(|(n, p)| (n.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// No sections and no root keys.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut cfg = ConfigFile::new();
        cfg.insert("default", CredentialProfile::new());
        cfg.insert("papi", CredentialProfile::new());
        cfg.insert("ccu", CredentialProfile::new());
        cfg.insert("default", CredentialProfile::from_parts("a", "b", "c", "d"));
        assert_eq!(cfg.section_names(), vec!["default", "papi", "ccu"]);
        assert_eq!(cfg.get("default").unwrap().client_token(), Some("a"));
    }

    #[test]
    fn test_take_root_leaves_sections() {
        let mut cfg = ConfigFile::new();
        cfg.root_mut().set("max-body", "131072");
        cfg.insert("default", CredentialProfile::new());
        let root = cfg.take_root();
        assert_eq!(root.get("max-body"), Some("131072"));
        assert!(cfg.root().is_empty());
        assert_eq!(cfg.section_names(), vec!["default"]);
    }

    #[test]
    fn test_remove() {
        let mut cfg = ConfigFile::new();
        cfg.insert("default", CredentialProfile::new());
        assert!(cfg.remove("default").is_some());
        assert!(cfg.remove("default").is_none());
        assert!(cfg.is_empty());
    }
}
