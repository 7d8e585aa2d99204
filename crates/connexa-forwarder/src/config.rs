use crate::error::ForwarderError;
use std::env;
use tracing::warn;

/// Environment variable holding the destination intake URL.
pub const GRAYLOG_URL_VAR: &str = "GRAYLOG_URL";
/// Environment variable identifying the secret that holds the auth token.
pub const AUTH_TOKEN_SECRET_ARN_VAR: &str = "GRAYLOG_AUTH_TOKEN_SECRET_ARN";
/// Environment variable with optional tags attached to every entry.
pub const TAGS_VAR: &str = "GRAYLOG_TAGS";
/// Environment variable selecting the customer code header value.
pub const CUSTOMER_CODE_VAR: &str = "CUSTOMER_CODE";

const DEFAULT_CUSTOMER_CODE: &str = "default";

/// Forwarder configuration, resolved from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination intake URL for log submissions.
    pub graylog_url: String,
    /// Identifier of the secret whose string value is the auth token.
    pub auth_token_secret_arn: String,
    /// Customer code sent as a header with every submission.
    pub customer_code: String,
    /// Optional tags copied into the `ddtags` field of every entry.
    pub tags: Option<String>,
}

impl Config {
    /// Resolve configuration from environment variables.
    ///
    /// `GRAYLOG_URL` and `GRAYLOG_AUTH_TOKEN_SECRET_ARN` are required; a
    /// missing or empty value is a fatal configuration error. The customer
    /// code falls back to `"default"` with a warning, matching the header
    /// the intake expects for unconfigured tenants.
    pub fn from_env() -> Result<Self, ForwarderError> {
        let graylog_url = env::var(GRAYLOG_URL_VAR)
            .ok()
            .filter(|val| !val.is_empty())
            .ok_or(ForwarderError::ConfigMissing(GRAYLOG_URL_VAR))?;
        let auth_token_secret_arn = env::var(AUTH_TOKEN_SECRET_ARN_VAR)
            .ok()
            .filter(|val| !val.is_empty())
            .ok_or(ForwarderError::ConfigMissing(AUTH_TOKEN_SECRET_ARN_VAR))?;
        let tags = env::var(TAGS_VAR).ok().filter(|val| !val.is_empty());
        let customer_code = match env::var(CUSTOMER_CODE_VAR) {
            Ok(val) if !val.is_empty() => val,
            _ => {
                warn!(
                    "{} environment variable not set, using default value: {}",
                    CUSTOMER_CODE_VAR, DEFAULT_CUSTOMER_CODE
                );
                DEFAULT_CUSTOMER_CODE.to_string()
            }
        };

        Ok(Config {
            graylog_url,
            auth_token_secret_arn,
            customer_code,
            tags,
        })
    }
}
