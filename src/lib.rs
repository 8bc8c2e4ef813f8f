//! # Nanonets Client
//! Asynchronous wrapper around the Nanonets document extraction REST API, providing typed methods to manage workflows, upload and inspect documents, and apply human-review corrections from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust services that push invoices, receipts, or other documents through Nanonets and read back the extracted fields and tables: configure with [`ClientBuilder`], pick an API group with [`Client::workflows`], [`Client::documents`], or [`Client::moderation`], and call the endpoint you need.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest` with a shared connection pool, so clone one [`Client`] rather than building many.
//!
//! ## Out of scope
//! No retries, rate limiting, or automatic pagination. Every call is a single request; the host application owns those policies.
//!
//! ## Errors
//! Transport failures surface as [`Error::Request`], non-2xx responses as [`Error::Api`] carrying the status and raw body, and unparseable 2xx bodies as [`Error::Decode`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use nanonets::{Client, UploadDocumentRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nanonets::Error> {
//!     let client = Client::new("YOUR_API_KEY")?;
//!
//!     for workflow in client.workflows().list().await? {
//!         println!("{}: {}", workflow.id, workflow.description);
//!     }
//!
//!     let request = UploadDocumentRequest::new("invoice.pdf").asynchronous(false);
//!     let document = client.documents().upload("wf_123", &request).await?;
//!     for page in &document.pages {
//!         for (name, values) in &page.data.fields {
//!             println!("{name}: {:?}", values.iter().map(|v| &v.value).collect::<Vec<_>>());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod de;
mod documents;
mod endpoint;
mod error;
mod models;
mod moderation;
mod workflows;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, RequestBody, TRACING_TARGET};
pub use documents::Documents;
pub use error::Error;
pub use models::*;
pub use moderation::{Moderation, PageRef};
pub use reqwest::{Method, StatusCode, Url};
pub use workflows::Workflows;

/// Result type alias for Nanonets operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
