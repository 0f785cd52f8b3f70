use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::config::ServiceTitanConfig;
use crate::core::{AppError, Result};
use crate::modules::servicetitan::models::TokenResponse;

/// Tokens are refreshed this long before they actually expire
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// A cached access token and the instant it stops being valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

/// Explicit holder for the memoized access token
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    token: Option<CachedToken>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached token if it is still valid at `now`, allowing the expiry margin
    pub fn get(&self, now: DateTime<Utc>) -> Option<&str> {
        self.token
            .as_ref()
            .filter(|token| now < token.expires_at - Duration::seconds(EXPIRY_MARGIN_SECS))
            .map(|token| token.value.as_str())
    }

    /// Store a token issued at `now` with a lifetime of `expires_in_secs`
    pub fn store(&mut self, value: String, expires_in_secs: i64, now: DateTime<Utc>) {
        self.token = Some(CachedToken {
            value,
            expires_at: now + Duration::seconds(expires_in_secs),
        });
    }

    pub fn clear(&mut self) {
        self.token = None;
    }
}

/// OAuth client-credentials flow against the ServiceTitan auth server
pub struct ServiceTitanAuth {
    client: Client,
    auth_url: String,
    client_id: String,
    client_secret: String,
}

impl ServiceTitanAuth {
    pub fn new(client: Client, config: &ServiceTitanConfig) -> Self {
        Self {
            client,
            auth_url: config.auth_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// Return a valid access token, requesting a new one only on a cache miss
    pub async fn access_token(&self, cache: &mut TokenCache) -> Result<String> {
        let now = Utc::now();
        if let Some(token) = cache.get(now) {
            debug!("Reusing cached ServiceTitan access token");
            return Ok(token.to_string());
        }

        let token = self.request_token().await?;
        cache.store(token.access_token.clone(), token.expires_in, now);

        info!(expires_in = token.expires_in, "Obtained ServiceTitan access token");
        Ok(token.access_token)
    }

    async fn request_token(&self) -> Result<TokenResponse> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .client
            .post(&self.auth_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("ServiceTitan auth request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, "ServiceTitan auth failed");
            return Err(AppError::Gateway(format!(
                "ServiceTitan auth failed: {} - {}",
                status.as_u16(),
                error_body
            )));
        }

        response.json::<TokenResponse>().await.map_err(|e| {
            AppError::Gateway(format!("Failed to parse ServiceTitan token response: {}", e))
        })
    }
}
