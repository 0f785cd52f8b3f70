use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Credentials and endpoints for the ServiceTitan API
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceTitanConfig {
    pub client_id: String,
    pub client_secret: String,
    pub app_key: String,
    pub tenant_id: String,
    pub auth_url: String,
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl ServiceTitanConfig {
    pub fn from_env() -> Result<Self> {
        Ok(ServiceTitanConfig {
            client_id: required("SERVICETITAN_CLIENT_ID")?,
            client_secret: required("SERVICETITAN_CLIENT_SECRET")?,
            app_key: required("SERVICETITAN_APP_KEY")?,
            tenant_id: required("SERVICETITAN_TENANT_ID")?,
            auth_url: env::var("SERVICETITAN_AUTH_URL")
                .unwrap_or_else(|_| "https://auth.servicetitan.io/connect/token".to_string()),
            api_base_url: env::var("SERVICETITAN_API_URL")
                .unwrap_or_else(|_| "https://api.servicetitan.io".to_string()),
            timeout_secs: env::var("SERVICETITAN_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid SERVICETITAN_TIMEOUT_SECS".to_string())
                })?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Tenant-scoped job planning base URL
    pub fn jpm_base_url(&self) -> String {
        format!(
            "{}/jpm/v2/tenant/{}",
            self.api_base_url.trim_end_matches('/'),
            self.tenant_id
        )
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| AppError::Configuration(format!("{} not set", key)))
}
