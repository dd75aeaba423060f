//! OAuth access tokens for a service account (JWT bearer grant).

use super::ServiceAccountKey;
use copydesk_error::{CopydeskResult, StorageError, StorageErrorKind};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// OAuth scope granting read and write access to spreadsheets.
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime accepted by Google (one hour maximum).
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens are refreshed this long before they expire.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Claims of the signed assertion exchanged for an access token.
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        now + REFRESH_MARGIN < self.expires_at
    }
}

/// Issues and caches access tokens for one service account.
pub(crate) struct TokenSource {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSource")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl TokenSource {
    /// Prepare a token source, validating the private key up front.
    pub(crate) fn new(key: ServiceAccountKey, http: reqwest::Client) -> CopydeskResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key().as_bytes()).map_err(|e| {
            StorageError::new(StorageErrorKind::Credentials(format!(
                "Invalid private key: {}",
                e
            )))
        })?;
        Ok(Self {
            key,
            encoding_key,
            http,
            cached: Mutex::new(None),
        })
    }

    pub(crate) fn key(&self) -> &ServiceAccountKey {
        &self.key
    }

    /// A valid access token, reusing the cached one while it is fresh.
    #[instrument(skip(self))]
    pub(crate) async fn access_token(&self) -> CopydeskResult<String> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            return Ok(token.token.clone());
        }

        debug!(client_email = %self.key.client_email(), "Requesting access token");
        let token = self.fetch_token().await?;
        let value = token.token.clone();
        *cached = Some(token);
        Ok(value)
    }

    fn signed_assertion(&self) -> CopydeskResult<String> {
        let iat = chrono::Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: self.key.client_email(),
            scope: SHEETS_SCOPE,
            aud: self.key.token_uri(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };
        encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key).map_err(|e| {
            StorageError::new(StorageErrorKind::Credentials(format!(
                "Failed to sign assertion: {}",
                e
            )))
            .into()
        })
    }

    async fn fetch_token(&self) -> CopydeskResult<CachedToken> {
        let assertion = self.signed_assertion()?;
        let requested_at = Instant::now();

        let response = self
            .http
            .post(self.key.token_uri())
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::Authorization(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::new(StorageErrorKind::Authorization(format!(
                "token endpoint returned {}: {}",
                status, body
            )))
            .into());
        }

        let parsed: TokenResponse = response.json().await.map_err(|e| {
            StorageError::new(StorageErrorKind::MalformedResponse(format!(
                "token response: {}",
                e
            )))
        })?;

        Ok(CachedToken {
            token: parsed.access_token,
            expires_at: requested_at + Duration::from_secs(parsed.expires_in),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_stale_inside_refresh_margin() {
        let now = Instant::now();
        let token = CachedToken {
            token: "t".to_string(),
            expires_at: now + Duration::from_secs(30),
        };
        assert!(!token.is_fresh(now));

        let token = CachedToken {
            token: "t".to_string(),
            expires_at: now + Duration::from_secs(3600),
        };
        assert!(token.is_fresh(now));
    }

    #[test]
    fn token_response_defaults_expiry() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"Bearer"}"#).unwrap();
        assert_eq!(parsed.access_token, "abc");
        assert_eq!(parsed.expires_in, 3600);
    }
}
