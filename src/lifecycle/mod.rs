//! # Application Lifecycle
//!
//! Wiring and observability for the client:
//!
//! - [`BlogApp`] - Builds the transport, the normalizing client, the four
//!   endpoint clients, the navigator and the theme store from one config
//! - [`setup_tracing`] - Initializes structured logging
//!
//! Dependencies are created once here and handed down; nothing in the
//! crate reaches for a global.

pub mod blog_app;
pub mod tracing;

pub use blog_app::*;
pub use self::tracing::setup_tracing;
