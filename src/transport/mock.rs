//! # Mock Transport
//!
//! An in-memory [`Transport`] for testing the normalizer and the endpoint
//! clients without a server.
//!
//! Queue expectations in the order the calls will happen, hand the mock to
//! the code under test, then call [`MockTransport::verify`].
//!
//! ```rust
//! use blog_client::transport::mock::MockTransport;
//! use blog_client::transport::{ErrorCode, TransportError};
//! use serde_json::json;
//!
//! let mock = MockTransport::new();
//! mock.expect_get("m2/6452962-6151685-default/301081171")
//!     .return_ok(200, json!({ "list": [] }));
//! mock.expect_get("m2/6452962-6151685-default/301081171")
//!     .return_err(
//!         TransportError::new("timeout of 10000ms exceeded").with_code(ErrorCode::Timeout),
//!     );
//! ```

use super::{QueryParams, RawResponse, Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct Expectation {
    path: String,
    response: Result<RawResponse, TransportError>,
}

/// A call the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub path: String,
    pub params: QueryParams,
}

/// A transport that replays queued responses.
///
/// Clones share the same expectation queue and call log.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTransport {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a GET to `path`.
    pub fn expect_get(&self, path: impl Into<String>) -> GetExpectationBuilder {
        GetExpectationBuilder {
            path: path.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<RawResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_string(),
            params: params.clone(),
        });

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.path == path => exp.response,
            Some(exp) => panic!("Unexpected GET {path}, expected GET {}", exp.path),
            None => panic!("Unexpected GET {path}, no expectations left"),
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder {
    path: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetExpectationBuilder {
    /// Replies with a response carrying `status` and `data`.
    pub fn return_ok(self, status: u16, data: Value) {
        self.push(Ok(RawResponse::new(status, data)));
    }

    /// Fails the call with a transport error.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<RawResponse, TransportError>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            path: self.path,
            response,
        });
    }
}
