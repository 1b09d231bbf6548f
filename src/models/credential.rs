//! Verification result returned by the introspection endpoint.

use crate::constants;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A (category, value) permission pair taken from a scope token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    pub category: String,
    pub value: String,
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.category, self.value)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialBody {
    name: String,
    created: String,
    created_by: String,
    updated: String,
    updated_by: String,
    activated: String,
    activated_by: String,
    scope: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    name: String,
    created: String,
    created_by: String,
    updated: String,
    updated_by: String,
    activated: String,
    activated_by: String,
    scope: String,
    grants: Vec<Grant>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    extra: BTreeMap<String, String>,
}

impl Credential {
    /// Parse a response body. All eight wire fields are required.
    pub fn from_body(body: &str) -> serde_json::Result<Self> {
        let raw: CredentialBody = serde_json::from_str(body)?;
        let grants = parse_grants(&raw.scope);
        Ok(Self {
            name: raw.name,
            created: raw.created,
            created_by: raw.created_by,
            updated: raw.updated,
            updated_by: raw.updated_by,
            activated: raw.activated,
            activated_by: raw.activated_by,
            scope: raw.scope,
            grants,
            extra: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    /// Look up a core field by its wire name, then the extension map.
    pub fn get(&self, key: &str) -> Option<&str> {
        let core = match key {
            "name" => Some(&self.name),
            "created" => Some(&self.created),
            "createdBy" => Some(&self.created_by),
            "updated" => Some(&self.updated),
            "updatedBy" => Some(&self.updated_by),
            "activated" => Some(&self.activated),
            "activatedBy" => Some(&self.activated_by),
            "scope" => Some(&self.scope),
            _ => None,
        };
        core.or_else(|| self.extra.get(key)).map(String::as_str)
    }

    /// Stash a derived value. Core fields are never overwritten.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.extra.insert(key.to_string(), value.into());
    }

    /// Human-readable report, one line per fact.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Credential Name: {}\n", self.name));
        out.push_str("---------------------------------\n");
        out.push_str(&format!("Created {} by {}\n", self.created, self.created_by));
        out.push_str(&format!("Updated {} by {}\n", self.updated, self.updated_by));
        out.push_str(&format!("Activated {} by {}\n", self.activated, self.activated_by));
        out.push_str("Grants:\n");
        for grant in &self.grants {
            out.push_str(&format!("    {}\n", grant));
        }
        out
    }
}

/// Split a space-delimited scope string into sorted, unique grants.
///
/// Tokens with too few path segments are skipped.
pub fn parse_grants(scope: &str) -> Vec<Grant> {
    let mut grants: Vec<Grant> = Vec::new();
    for token in scope.split(' ').filter(|t| !t.is_empty()) {
        let segments: Vec<&str> = token.split('/').collect();
        let (Some(category), Some(value)) = (
            segments.get(constants::SCOPE_CATEGORY_INDEX),
            segments.get(constants::SCOPE_VALUE_INDEX),
        ) else {
            tracing::warn!(token, "skipping malformed scope token");
            continue;
        };
        grants.push(Grant {
            category: category.to_string(),
            value: value.to_string(),
        });
    }
    grants.sort_by_cached_key(|g| g.to_string());
    grants.dedup();
    grants
}
