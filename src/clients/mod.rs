//! Typed clients for the backend list endpoints.
//!
//! Every client wraps the shared [`ApiClient`](crate::normalizer::ApiClient)
//! and gets its `get_data` from [`ResourceEndpoint`].

pub mod article_client;
pub mod endpoint;
pub mod label_client;
pub mod photo_client;
pub mod record_client;

pub use article_client::*;
pub use endpoint::*;
pub use label_client::*;
pub use photo_client::*;
pub use record_client::*;
