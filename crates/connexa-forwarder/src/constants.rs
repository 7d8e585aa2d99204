//! Intake limits and admission constants.
//!
//! The limits mirror the batch constraints of the destination log intake:
//! a payload-size ceiling per POST request, a size ceiling per individual
//! entry, and an entry-count ceiling per request.

/// Maximum cumulative payload size (uncompressed) per POST request, in bytes.
pub const MAX_PAYLOAD_SIZE_BYTES: usize = 5_000_000;

/// Maximum size of a single log entry, in bytes.
///
/// Lines longer than this are split into fixed-length fragments rather than
/// dropped; each fragment becomes its own entry.
pub const MAX_LOG_SIZE_BYTES: usize = 1_000_000;

/// Maximum number of entries per POST request.
pub const MAX_BATCH_ENTRIES: usize = 1_000;

/// Only object keys under this prefix are forwarded.
pub const OBJECT_KEY_PREFIX: &str = "CloudConnexa";

/// Value of the `ddsource` field on every submitted entry.
pub const LOG_SOURCE: &str = "CloudConnexa";

/// Extracts the trailing `<kind>.<codec>` suffix pair from an object key.
pub const KEY_TYPE_PATTERN: &str = r"^.*\.([^.]*)\.([^.]*)$";

/// Required `kind` capture for forwarded objects.
pub const JSONL_TYPE: &str = "jsonl";

/// Required `codec` capture for forwarded objects.
pub const GZ_TYPE: &str = "gz";
