//! # CloudConnexa → Graylog log forwarder
//!
//! Event-driven shipper for gzip-compressed newline-delimited JSON log
//! bundles deposited in an object store. Each invocation streams the
//! referenced objects through a decompress → line-split → batch pipeline
//! and POSTs the resulting batches to a Graylog HTTP intake that accepts
//! the Datadog-style array format.
//!
//! # Pipeline
//!
//! ```text
//!   S3 object stream
//!         │
//!         v
//!   ┌──────────────┐
//!   │ GzLineReader │  (gzip decode, newline split, oversize fragmenting)
//!   └──────┬───────┘
//!          │
//!          v
//!   ┌──────────────┐
//!   │  Aggregator  │  (payload-size bounded bundles)
//!   └──────┬───────┘
//!          │
//!          v
//!   ┌──────────────┐
//!   │   Flusher    │  (entry-count partitioning upstream, one POST per chunk)
//!   └──────────────┘
//! ```
//!
//! All collaborator clients are scoped to the invocation; there is no
//! shared mutable state between invocations and no in-process retry. The
//! invoking platform's at-least-once delivery is the recovery mechanism.

pub mod aggregator;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod flusher;
pub mod handler;
pub mod line_reader;
pub mod object_store;
pub mod secrets;

pub use error::ForwarderError;
pub use event::S3Event;
pub use handler::Forwarder;
