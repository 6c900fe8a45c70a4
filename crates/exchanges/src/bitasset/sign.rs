//! Bitasset credentials and request signing
//!
//! Bitasset uses a timestamp+query-signature scheme: the authenticated
//! namespace merges `apiAccessKey` and `apiTimeStamp` into the query string,
//! signs the URL-encoded parameters with HMAC-SHA256 keyed by the hex SHA1
//! digest of the secret, and appends the signature as `apiSign`. No custom
//! headers are sent. This is not the legacy nonce+`apisign`-header scheme
//! used elsewhere in the venue family; the two are not interchangeable.

use crate::errors::{ExchangeError, Result};
use crate::types::{Namespace, Params, SignedRequest, VenueDescriptor};
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::collections::HashMap;

type HmacSha256 = Hmac<Sha256>;

/// Bitasset API credentials
#[derive(Debug, Clone)]
pub struct BitassetCredentials {
    pub api_key: String,
    pub secret_key: String,
}

impl BitassetCredentials {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key,
        }
    }

    /// Load credentials from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("BITASSET_API_KEY")
            .map_err(|_| ExchangeError::MissingCredentials("BITASSET_API_KEY".to_string()))?;
        let secret_key = std::env::var("BITASSET_SECRET_KEY")
            .map_err(|_| ExchangeError::MissingCredentials("BITASSET_SECRET_KEY".to_string()))?;

        Ok(Self::new(api_key, secret_key))
    }

    /// Check that both key and secret are present
    pub fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.secret_key.is_empty()
    }
}

/// Bitasset request signer
pub struct BitassetSigner {
    credentials: Option<BitassetCredentials>,
}

impl BitassetSigner {
    /// Create a signer; credentials may be absent for public-only use
    pub fn new(credentials: Option<BitassetCredentials>) -> Self {
        Self { credentials }
    }

    /// Prepare one outbound request
    ///
    /// `timestamp_ms` is the current epoch milliseconds; the caller reads the
    /// clock so signing itself stays deterministic.
    pub fn sign(
        &self,
        descriptor: &VenueDescriptor,
        path: &str,
        namespace: Namespace,
        method: &str,
        params: &Params,
        timestamp_ms: u64,
    ) -> Result<SignedRequest> {
        let mut url = format!(
            "{}/{}/cash/",
            descriptor.base_url(namespace),
            descriptor.version
        );

        match namespace {
            Namespace::Public => {
                url.push_str("public/");
                url.push_str(path);
                if !params.is_empty() {
                    url.push('?');
                    url.push_str(&urlencode(params));
                }
            }
            Namespace::Accounts => {
                let credentials = self
                    .credentials
                    .as_ref()
                    .filter(|c| c.is_valid())
                    .ok_or_else(|| {
                        ExchangeError::MissingCredentials(
                            "bitasset accounts endpoints require apiKey and secret".to_string(),
                        )
                    })?;

                url.push_str("accounts/");

                let mut merged: Params = vec![
                    ("apiAccessKey".to_string(), credentials.api_key.clone()),
                    ("apiTimeStamp".to_string(), timestamp_ms.to_string()),
                ];
                for (key, value) in params {
                    // caller params win on key collision, order preserved
                    match merged.iter_mut().find(|(k, _)| k == key) {
                        Some(slot) => slot.1 = value.clone(),
                        None => merged.push((key.clone(), value.clone())),
                    }
                }

                // the signature covers exactly the query string sent on the wire
                let query = urlencode(&merged);
                let signature = signature_for(&query, &credentials.secret_key)?;

                url.push_str(path);
                url.push('?');
                url.push_str(&query);
                url.push_str("&apiSign=");
                url.push_str(&urlencoding::encode(&signature));
            }
        }

        Ok(SignedRequest {
            url,
            method: method.to_string(),
            body: None,
            headers: HashMap::new(),
        })
    }
}

/// HMAC-SHA256 over the payload, keyed by the hex SHA1 digest of the secret
pub(crate) fn signature_for(payload: &str, secret: &str) -> Result<String> {
    let secret1 = hex::encode(Sha1::digest(secret.as_bytes()));

    let mut mac = HmacSha256::new_from_slice(secret1.as_bytes())
        .map_err(|e| ExchangeError::Signing(format!("HMAC setup failed: {e}")))?;
    mac.update(payload.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// URL-encode a parameter list, preserving insertion order
pub(crate) fn urlencode(params: &Params) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
