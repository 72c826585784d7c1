//! # Blog Client
//!
//! > **The data and shell layer behind a personal blog front end.**
//!
//! This crate holds everything a blog UI needs below the widgets: typed list
//! clients for the backend, a response normalizer that turns every failure
//! into a user notification, a route table, and the day/night theme flag.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Payload or nothing
//! Every endpoint returns `Option<serde_json::Value>`. `Some` is the backend
//! payload, untouched. `None` means the call failed **and the user has
//! already been told**. Views never write error handling for network calls.
//!
//! ### One place for failures
//! The [`ApiClient`](normalizer::ApiClient) is the only code that raises API
//! error toasts. Transport errors are classified in a fixed order:
//! timeout, then "request sent but no response", then everything else.
//!
//! ### Explicit state
//! There are no globals. The theme flag lives in an owned
//! [`ThemeStore`](theme::ThemeStore) and navigation in a
//! [`Navigator`](router::Navigator), both handed to the shell by
//! [`BlogApp`](lifecycle::BlogApp).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Wire ([`transport`])
//! - **Role**: Issues GET requests. Knows nothing about success or failure.
//! - **Key items**: [`Transport`](transport::Transport), [`HttpTransport`](transport::HttpTransport),
//!   [`MockTransport`](transport::mock::MockTransport).
//!
//! ### 2. The Normalizer ([`normalizer`], [`toast`])
//! - **Role**: Maps every outcome to payload-or-`None` and pushes error toasts.
//! - **Key items**: [`ApiClient`](normalizer::ApiClient), [`Failure`](normalizer::Failure).
//!
//! ### 3. The Interface ([`clients`], [`model`])
//! - **Role**: One typed client per resource: articles, labels, photos, records.
//! - **Key items**: [`ResourceEndpoint`](clients::ResourceEndpoint), [`ListQuery`](model::ListQuery),
//!   [`PhotoQuery`](model::PhotoQuery).
//!
//! ### 4. The Shell ([`router`], [`theme`], [`lifecycle`], [`config`])
//! - **Role**: Route table, history, theme flag, wiring and configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo against the local mock backend
//! RUST_LOG=info cargo run
//!
//! # Point it somewhere else
//! BLOG_API__BASE_URL=http://10.0.0.2:4523 cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod normalizer;
pub mod router;
pub mod theme;
pub mod toast;
pub mod transport;
