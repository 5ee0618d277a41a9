use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use tg_core::domain::entities::UserCredentials;
use tg_core::errors::{AuthError, DomainError};
use tg_core::repositories::UserLookup;
use tg_shared::UserServiceConfig;

use crate::InfrastructureError;

const SERVICE_NAME: &str = "user-management";

/// Wire representation of a user returned by the user-management service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<UserRecord> for UserCredentials {
    fn from(record: UserRecord) -> Self {
        UserCredentials {
            subject: record.id,
            username: record.username,
            password_hash: record.password_hash,
            roles: record.roles,
        }
    }
}

/// `UserLookup` backed by the user-management HTTP API
#[derive(Debug, Clone)]
pub struct HttpUserLookupClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpUserLookupClient {
    /// Create a client with the configured base URL and request timeout
    pub fn new(config: &UserServiceConfig) -> Result<Self, InfrastructureError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            InfrastructureError::Config(format!(
                "Invalid user service URL {}: {}",
                config.base_url, e
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(InfrastructureError::Config(format!(
                "User service URL {} cannot be used as a base",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        debug!(
            base_url = %base_url,
            timeout_secs = config.timeout_secs,
            "User service client initialized"
        );

        Ok(Self { client, base_url })
    }

    /// Build the lookup URL, encoding `username` as a single path segment
    pub fn lookup_url(&self, username: &str) -> Result<Url, InfrastructureError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| InfrastructureError::Config("User service URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["api", "v1", "users", "by-username", username]);
        Ok(url)
    }

    /// Fetch a user record; `Ok(None)` on 404
    pub async fn fetch(&self, username: &str) -> Result<Option<UserRecord>, InfrastructureError> {
        let url = self.lookup_url(username)?;
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let record = response
                    .json::<UserRecord>()
                    .await
                    .map_err(|e| InfrastructureError::Decode(e.to_string()))?;
                Ok(Some(record))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(InfrastructureError::UnexpectedStatus {
                service: SERVICE_NAME,
                status: status.as_u16(),
            }),
        }
    }
}

#[async_trait]
impl UserLookup for HttpUserLookupClient {
    async fn resolve(&self, username: &str) -> Result<Option<UserCredentials>, DomainError> {
        match self.fetch(username).await {
            Ok(record) => Ok(record.map(UserCredentials::from)),
            Err(e) => {
                error!(
                    username = username,
                    error = %e,
                    event = "user_lookup_failed",
                    "User service lookup failed"
                );
                Err(AuthError::UserLookupUnavailable.into())
            }
        }
    }
}

// Keeps the hash out of logs.
impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}
