//! Credential verification against the introspection endpoint.

use crate::constants;
use crate::core::config_store;
use crate::core::signer::{RequestDescriptor, RequestSigner};
use crate::error::{Error, Result};
use crate::models::credential::Credential;
use crate::models::profile::SigningProfile;
use crate::util::path::expand_tilde;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info, warn};

const EMPTY_RESPONSE: &str = "An error occurred, empty or invalid response from the request";

/// Anything that can vouch for the credentials stored in a section.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, path: &Path, section: Option<&str>, debug: bool) -> Result<Credential>;
}

/// Load the section and turn it into signing material.
async fn signing_context(path: &Path, section: &str) -> Result<SigningProfile> {
    let path = expand_tilde(path);
    let profile = config_store::read_section(&path, section)
        .await?
        .ok_or_else(|| Error::NotFound(section.to_string()))?;
    if !profile.validate(false)? {
        return Err(Error::invalid(format!(
            "section '{}' is missing {}",
            section,
            profile.missing_fields().join(", ")
        )));
    }
    profile.to_signing()
}

fn require_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::invalid("Invalid File Name parameter"));
    }
    Ok(())
}

/// Verifies by sending one signed request through a [`RequestSigner`].
pub struct EdgeGridVerifier<S> {
    signer: S,
}

impl<S: RequestSigner> EdgeGridVerifier<S> {
    pub fn new(signer: S) -> Self {
        Self { signer }
    }
}

#[async_trait]
impl<S: RequestSigner> CredentialVerifier for EdgeGridVerifier<S> {
    async fn verify(&self, path: &Path, section: Option<&str>, debug: bool) -> Result<Credential> {
        require_path(path)?;
        let section = config_store::section_or_default(section);
        let profile = signing_context(path, section)
            .await
            .map_err(|e| Error::Auth(e.to_string()))?;

        let request = RequestDescriptor::get(constants::VERIFY_PATH);
        debug!(section, host = %profile.host, path = %request.path, "verifying credentials");
        let response = self
            .signer
            .send(&request, &profile, debug)
            .await
            .map_err(|e| Error::Auth(format!("An error occurred, with the message {}", e)))?;

        let Some(response) = response else {
            warn!(section, "no response from introspection endpoint");
            return Err(Error::Auth(EMPTY_RESPONSE.to_string()));
        };
        if !(200..300).contains(&response.status) {
            return Err(Error::Auth(format!(
                "Unable to complete action.  Status code {}",
                response.status
            )));
        }
        if response.body.trim().is_empty() {
            warn!(section, status = response.status, "empty response from introspection endpoint");
            return Err(Error::Auth(EMPTY_RESPONSE.to_string()));
        }

        let credential = Credential::from_body(&response.body)
            .map_err(|e| Error::Auth(format!("{}: {}", EMPTY_RESPONSE, e)))?;
        info!(section, name = credential.name(), grants = credential.grants().len(), "credentials verified");
        Ok(credential)
    }
}

/// Verifier that never leaves the machine.
///
/// It still reads and validates the section, then answers with a canned
/// response body. Tests and dry runs use it in place of [`EdgeGridVerifier`].
pub struct StaticVerifier {
    body: String,
    strict: bool,
}

impl StaticVerifier {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            strict: true,
        }
    }

    /// With `strict` off, incomplete sections are reported as a generic
    /// insufficiency instead of naming the first missing field.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[async_trait]
impl CredentialVerifier for StaticVerifier {
    async fn verify(&self, path: &Path, section: Option<&str>, _debug: bool) -> Result<Credential> {
        require_path(path)?;
        let section = config_store::section_or_default(section);
        let path = expand_tilde(path);
        let profile = config_store::read_section(&path, section)
            .await?
            .ok_or_else(|| Error::NotFound(section.to_string()))?;
        if !profile.validate(self.strict)? {
            return Err(Error::Auth("Insufficient credentials".to_string()));
        }
        Credential::from_body(&self.body).map_err(|e| Error::Auth(e.to_string()))
    }
}
