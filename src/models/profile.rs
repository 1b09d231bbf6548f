//! A single credential section.

use crate::constants;
use crate::error::{Error, Result};
use serde::Serialize;
use zeroize::Zeroizing;

/// Ordered key/value fields of one section.
///
/// Only the four [`constants::REQUIRED_FIELDS`] matter for signing, but any
/// other key found in the file is kept so a read/write cycle loses nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialProfile {
    fields: Vec<(String, String)>,
}

impl CredentialProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from the four required fields.
    pub fn from_parts(
        client_token: &str,
        client_secret: &str,
        access_token: &str,
        host: &str,
    ) -> Self {
        let mut profile = Self::new();
        profile.set("client_token", client_token);
        profile.set("client_secret", client_secret);
        profile.set("access_token", access_token);
        profile.set("host", host);
        profile
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a field, keeping its original position if it already exists.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.fields.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(idx).1)
    }

    /// Field-by-field merge; `incoming` wins on collisions.
    pub fn merge_from(&mut self, incoming: &CredentialProfile) {
        for (key, value) in &incoming.fields {
            self.set(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn client_token(&self) -> Option<&str> {
        self.get("client_token")
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.get("client_secret")
    }

    pub fn access_token(&self) -> Option<&str> {
        self.get("access_token")
    }

    pub fn host(&self) -> Option<&str> {
        self.get("host")
    }

    /// Required fields that are absent or empty, in validation order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        constants::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| self.get(field).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }

    /// Check that all required fields are present.
    ///
    /// With `strict`, the first missing field is an error. Otherwise the
    /// result is `Ok(false)` and the caller decides.
    pub fn validate(&self, strict: bool) -> Result<bool> {
        match self.missing_fields().first() {
            None => Ok(true),
            Some(field) if strict => Err(Error::invalid(format!("No defined {}", field))),
            Some(_) => Ok(false),
        }
    }

    /// Convert into the material a signer needs. Fails on missing fields.
    pub fn to_signing(&self) -> Result<SigningProfile> {
        self.validate(true)?;
        let field = |key: &str| self.get(key).unwrap_or_default().trim().to_string();
        Ok(SigningProfile {
            client_token: field("client_token"),
            client_secret: Zeroizing::new(field("client_secret")),
            access_token: field("access_token"),
            host: normalize_host(&field("host")),
        })
    }

    /// Public view for listing: every field except the secret.
    pub fn redacted(&self) -> RedactedProfile {
        RedactedProfile {
            host: self.host().map(str::to_string),
            client_token: self.client_token().map(str::to_string),
            complete: self.missing_fields().is_empty(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CredentialProfile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut profile = Self::new();
        for (k, v) in iter {
            profile.set(&k.into(), &v.into());
        }
        profile
    }
}

/// Validated credentials handed to a signer.
#[derive(Debug, Clone)]
pub struct SigningProfile {
    pub client_token: String,
    pub client_secret: Zeroizing<String>,
    pub access_token: String,
    /// Always carries a scheme.
    pub host: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedactedProfile {
    pub host: Option<String>,
    pub client_token: Option<String>,
    pub complete: bool,
}

/// Prefix `https://` to hosts without a scheme.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("{}{}", constants::DEFAULT_SCHEME, host)
    }
}
