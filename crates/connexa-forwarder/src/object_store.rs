//! Object reads from the S3-compatible store.

use std::io::Read;

use tokio::io::BufReader;
use tokio_util::io::SyncIoBridge;

use crate::error::ForwarderError;

const READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Opens `bucket`/`key` and returns a buffered blocking reader over the
/// object body, suitable for handing to a decompression thread.
///
/// Open errors are fatal. Dropping the reader releases the stream on every
/// exit path.
pub async fn fetch(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<impl Read + Send + 'static, ForwarderError> {
    let object = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| ForwarderError::ObjectRead(format!("{bucket}/{key}: {e}")))?;

    let body = BufReader::with_capacity(READ_BUFFER_SIZE, object.body.into_async_read());
    Ok(SyncIoBridge::new(body))
}
