//! Auth token resolution from Secrets Manager.

use tracing::error;

use crate::error::ForwarderError;

/// Fetches the auth token by resolving the configured secret identifier.
///
/// Called once per invocation, before the first submission. The secret's
/// string value is used verbatim as the `AUTH` header.
pub async fn resolve_auth_token(
    client: &aws_sdk_secretsmanager::Client,
    secret_id: &str,
) -> Result<String, ForwarderError> {
    let response = client
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|e| {
            error!("Exception when calling GetSecretValue: {}", e);
            ForwarderError::SecretFetch(e.to_string())
        })?;

    response
        .secret_string()
        .map(str::to_owned)
        .ok_or_else(|| ForwarderError::SecretFetch("secret has no string value".to_string()))
}
