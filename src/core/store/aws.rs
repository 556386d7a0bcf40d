//! AWS Secrets Manager store.
//!
//! Reads secrets with `GetSecretValue`. Enable with `--features aws`.
//!
//! ## Usage
//!
//! ```toml
//! [aws]
//! region = "us-east-1"
//! # endpoint_url = "http://localhost:4566"
//! ```
//!
//! Credentials come from the environment (AWS_ACCESS_KEY_ID, etc.) or from the
//! default credential provider chain. Clients built with [`SecretsManager::connect`]
//! have SDK retries disabled: a failed read is a failed resolution.

use async_trait::async_trait;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use tracing::{debug, trace};

use super::SecretStore;
use crate::core::config::AwsConfig;
use crate::error::StoreError;

/// AWS Secrets Manager backend
///
/// Owns a shared SDK client. The client is cheap to clone and safe for
/// concurrent use; each read is an independent request.
#[derive(Debug, Clone)]
pub struct SecretsManager {
    client: aws_sdk_secretsmanager::Client,
}

impl SecretsManager {
    /// Wrap an existing client
    pub fn new(client: aws_sdk_secretsmanager::Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS configuration plus the overrides in
    /// `config`.
    pub async fn connect(config: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .retry_config(aws_config::retry::RetryConfig::disabled());

        if let Some(region) = &config.region {
            debug!(region = %region, "using configured AWS region");
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint_url {
            debug!(endpoint = %endpoint, "using configured Secrets Manager endpoint");
            loader = loader.endpoint_url(endpoint.clone());
        }

        let sdk_config = loader.load().await;
        Self::new(aws_sdk_secretsmanager::Client::new(&sdk_config))
    }
}

#[async_trait]
impl SecretStore for SecretsManager {
    async fn get_secret_value(&self, id: &str) -> Result<String, StoreError> {
        trace!(secret_id = %id, "reading from AWS Secrets Manager");

        let output = self
            .client
            .get_secret_value()
            .secret_id(id)
            .send()
            .await
            .map_err(|e| classify(id, e))?;

        // An absent string reads as empty; binary secrets are used when they are UTF-8.
        let payload = match (output.secret_string(), output.secret_binary()) {
            (Some(s), _) => s.to_string(),
            (None, Some(blob)) => String::from_utf8(blob.as_ref().to_vec()).unwrap_or_default(),
            (None, None) => String::new(),
        };

        trace!(secret_id = %id, payload_len = payload.len(), "read from AWS Secrets Manager");
        Ok(payload)
    }
}

fn classify<R>(id: &str, err: SdkError<GetSecretValueError, R>) -> StoreError
where
    R: std::fmt::Debug + 'static,
{
    if let Some(service) = err.as_service_error() {
        if service.is_resource_not_found_exception() {
            return StoreError::NotFound(id.to_string());
        }
        if service.code() == Some("AccessDeniedException") {
            return StoreError::AccessDenied(DisplayErrorContext(&err).to_string());
        }
    }
    StoreError::Transport(DisplayErrorContext(&err).to_string())
}
