//! Delivery of PublicForms bodies to ISPolitical.
//!
//! One synchronous HTTPS POST per form, authenticated with HTTP Basic auth.
//! There is no retry, batching or rate limiting.

mod transport;
mod uploader;

pub use transport::{DryRunTransport, HttpTransport, Transport, TransportResponse};
pub use uploader::{UploadSummary, Uploader};
