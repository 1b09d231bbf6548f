//! Request-signing capability and the EdgeGrid adapter used by the binary.
//!
//! The verifier only depends on [`RequestSigner`]; any signer that can turn a
//! request descriptor plus a profile into a response plugs in.

use crate::constants;
use crate::models::profile::SigningProfile;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;

/// Method and path of a request to sign; the host comes from the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: String,
    pub path: String,
}

impl RequestDescriptor {
    pub fn get(path: &str) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("invalid host '{0}'")]
    InvalidHost(String),
    #[error("{0}")]
    Signing(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Signs a request for a profile and performs the send.
///
/// `Ok(None)` means the exchange produced no response at all.
#[async_trait]
pub trait RequestSigner: Send + Sync {
    async fn send(
        &self,
        request: &RequestDescriptor,
        profile: &SigningProfile,
        debug: bool,
    ) -> Result<Option<SignedResponse>, SignerError>;
}

/// EG1-HMAC-SHA256 signer over reqwest.
#[derive(Debug, Clone, Default)]
pub struct EdgeGridSigner {
    client: reqwest::Client,
}

impl EdgeGridSigner {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestSigner for EdgeGridSigner {
    async fn send(
        &self,
        request: &RequestDescriptor,
        profile: &SigningProfile,
        debug: bool,
    ) -> Result<Option<SignedResponse>, SignerError> {
        let base = reqwest::Url::parse(&profile.host)
            .map_err(|_| SignerError::InvalidHost(profile.host.clone()))?;
        let url = base
            .join(&request.path)
            .map_err(|_| SignerError::InvalidHost(profile.host.clone()))?;
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| SignerError::Signing(e.to_string()))?;

        let header = authorization_header(
            profile,
            &request.method,
            &url,
            Utc::now(),
            &uuid::Uuid::new_v4().to_string(),
        )?;
        if debug {
            // The header carries a derived signature, never the secret.
            debug!(method = %request.method, url = %url, authorization = %header, "signed request");
        }

        let response = self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, header)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        if debug {
            debug!(status, bytes = body.len(), "received response");
        }
        Ok(Some(SignedResponse { status, body }))
    }
}

/// EdgeGrid timestamp, e.g. `20240105T10:11:12+0000`.
pub fn edgegrid_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H:%M:%S+0000").to_string()
}

/// Build the `Authorization` header for a body-less request.
pub fn authorization_header(
    profile: &SigningProfile,
    method: &str,
    url: &reqwest::Url,
    now: DateTime<Utc>,
    nonce: &str,
) -> Result<String, SignerError> {
    let timestamp = edgegrid_timestamp(now);
    let prefix = format!(
        "{} client_token={};access_token={};timestamp={};nonce={};",
        constants::EDGEGRID_AUTH_SCHEME,
        profile.client_token,
        profile.access_token,
        timestamp,
        nonce
    );

    let host = match url.port() {
        Some(port) => format!("{}:{}", url.host_str().unwrap_or_default(), port),
        None => url.host_str().unwrap_or_default().to_string(),
    };
    let path = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };
    // Canonical headers and content hash are empty for GET without body.
    let data = [
        method.to_uppercase().as_str(),
        url.scheme(),
        host.as_str(),
        path.as_str(),
        "",
        "",
        prefix.as_str(),
    ]
    .join("\t");

    let signing_key = Zeroizing::new(hmac_base64(profile.client_secret.as_bytes(), &timestamp)?);
    let signature = hmac_base64(signing_key.as_bytes(), &data)?;
    Ok(format!("{}signature={}", prefix, signature))
}

fn hmac_base64(key: &[u8], data: &str) -> Result<String, SignerError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| SignerError::Signing(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
