/// Errors that can occur while forwarding a batch of log objects.
///
/// Every variant is fatal for the invocation; the invoking platform's
/// at-least-once delivery is the recovery mechanism. Rejected object keys
/// are not errors and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum ForwarderError {
    #[error("{0} environment variable is not set")]
    ConfigMissing(&'static str),

    #[error("Failed to retrieve auth token secret: {0}")]
    SecretFetch(String),

    #[error("Failed to read object {0}")]
    ObjectRead(String),

    #[error("Failed to decompress object stream: {0}")]
    Decompress(String),

    #[error("Failed to send logs to Graylog: {0}")]
    Submission(String),

    #[error("Failed to serialize log batch: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}
