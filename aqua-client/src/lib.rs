//! Aqua Client - HTTP client for the Aqua Tasty backend
//!
//! Typed endpoint calls over the backend REST API, plus the stateful
//! shell: [`RecordStore`] (the per-refresh snapshot of raw
//! collections) and [`Session`] (refresh-all and fire-and-refresh
//! commands). All view derivation stays in `shared::view`.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod store;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::Session;
pub use store::RecordStore;
