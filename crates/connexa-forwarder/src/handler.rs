//! Event dispatch: admission checks, streaming, and submission order.
//!
//! One invocation processes its records strictly in order: every accepted
//! object is streamed through the gzip line reader into the aggregator,
//! then the accumulated bundles are partitioned by entry count and
//! submitted one POST at a time.

use std::io::Read;

use regex::Regex;
use tracing::info;

use crate::aggregator::LogAggregator;
use crate::config::Config;
use crate::constants::{GZ_TYPE, JSONL_TYPE, KEY_TYPE_PATTERN, MAX_BATCH_ENTRIES, OBJECT_KEY_PREFIX};
use crate::error::ForwarderError;
use crate::event::S3Event;
use crate::flusher::Flusher;
use crate::line_reader::GzLineReader;
use crate::{object_store, secrets};

/// Per-invocation forwarder over scoped collaborator clients.
pub struct Forwarder {
    s3: aws_sdk_s3::Client,
    secrets: aws_sdk_secretsmanager::Client,
    key_type_pattern: Regex,
}

impl Forwarder {
    #[must_use]
    pub fn new(s3: aws_sdk_s3::Client, secrets: aws_sdk_secretsmanager::Client) -> Self {
        #[allow(clippy::expect_used)]
        let key_type_pattern = Regex::new(KEY_TYPE_PATTERN).expect("failed creating regex");
        Forwarder {
            s3,
            secrets,
            key_type_pattern,
        }
    }

    /// Processes one event batch.
    ///
    /// Returns `"Ok"` after all bundles are submitted. A record rejected by
    /// the key filter or type inference ends the invocation immediately
    /// with an empty acknowledgement and no submission, including for
    /// records that were already streamed. Any other failure is fatal.
    pub async fn handle(&self, event: S3Event) -> Result<String, ForwarderError> {
        let mut aggregator = LogAggregator::default();

        for record in event.records {
            let bucket = record.s3.bucket.name;
            let key = record.s3.object.url_decoded_key();

            if !key.starts_with(OBJECT_KEY_PREFIX) {
                info!("Unable to infer prefix for key {}", key);
                return Ok(String::new());
            }
            match self.key_type(&key) {
                None => {
                    info!("Unable to infer type for key {}", key);
                    return Ok(String::new());
                }
                Some((kind, _)) if kind != JSONL_TYPE => {
                    info!("Skipping not jsonl type {}", key);
                    return Ok(String::new());
                }
                Some((_, codec)) if codec != GZ_TYPE => {
                    info!("Skipping not gz type {}", key);
                    return Ok(String::new());
                }
                Some(_) => {}
            }

            let body = object_store::fetch(&self.s3, &bucket, &key).await?;
            aggregator = drain_lines(body, aggregator).await?;
        }

        let config = Config::from_env()?;
        let auth_token =
            secrets::resolve_auth_token(&self.secrets, &config.auth_token_secret_arn).await?;
        let flusher = Flusher::new(&config, auth_token);

        for bundle in aggregator.into_bundles() {
            for chunk in bundle.chunks(MAX_BATCH_ENTRIES) {
                flusher.submit(chunk).await?;
            }
        }

        Ok("Ok".to_string())
    }

    /// Infers the `(kind, codec)` suffix pair from an object key.
    fn key_type<'k>(&self, key: &'k str) -> Option<(&'k str, &'k str)> {
        let captures = self.key_type_pattern.captures(key)?;
        match (captures.get(1), captures.get(2)) {
            (Some(kind), Some(codec)) => Some((kind.as_str(), codec.as_str())),
            _ => None,
        }
    }
}

/// Drains the gzip line stream into the aggregator on a blocking thread.
async fn drain_lines(
    body: impl Read + Send + 'static,
    mut aggregator: LogAggregator,
) -> Result<LogAggregator, ForwarderError> {
    tokio::task::spawn_blocking(move || {
        for line in GzLineReader::new(body) {
            let line = line.map_err(|e| ForwarderError::Decompress(e.to_string()))?;
            aggregator.push(line);
        }
        Ok(aggregator)
    })
    .await
    .map_err(|e| ForwarderError::Runtime(e.to_string()))?
}
