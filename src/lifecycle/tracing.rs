//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter.
//!
//! `RUST_LOG` wins when set; otherwise the configured `logging.level` is used.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show query payloads and transport details
//! RUST_LOG=debug cargo run
//!
//! # Only the normalizer
//! RUST_LOG=blog_client::normalizer=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a failed article fetch reads roughly:
//!
//! ```text
//! DEBUG get_data{query=ListQuery { page: 1, size: 10 } path="m2/6452962-6151685-default/301081171"}: Sending request
//! DEBUG get_data{...}:get{path="m2/..."}: get called query=ListQuery { page: 1, size: 10 }
//! DEBUG get_data{...}:get{...}: Transport failed error=Transport error: operation timed out code=Some(Timeout)
//!  WARN get_data{...}:get{...}: Request failed failure=Timeout
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - spans carry the endpoint path
        .compact()
        .init();
}
