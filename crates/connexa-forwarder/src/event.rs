//! Serde model of the object-creation event batch delivered per invocation.
//!
//! Only the fields the forwarder consumes are modeled; everything else in
//! the notification document is ignored.

use percent_encoding::percent_decode_str;
use serde::Deserialize;

/// A batch of object-creation records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

/// One object-creation record.
#[derive(Debug, Clone, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3ObjectRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3ObjectRef {
    /// Object key as delivered in the notification: percent-encoded, with
    /// spaces encoded as `+`.
    pub key: String,
}

impl S3ObjectRef {
    /// The object key with the notification encoding undone.
    ///
    /// Keys may contain spaces or unicode non-ASCII characters.
    pub fn url_decoded_key(&self) -> String {
        let plus_decoded = self.key.replace('+', " ");
        percent_decode_str(&plus_decoded)
            .decode_utf8_lossy()
            .into_owned()
    }
}
