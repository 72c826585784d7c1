//! # Response Normalization
//!
//! [`ApiClient`] sits between the endpoint clients and the [`Transport`] and
//! turns every outcome into a payload or `None`:
//!
//! | Outcome                            | Caller gets | Toast description        |
//! |------------------------------------|-------------|--------------------------|
//! | response, status 200               | `Some(data)`| none                     |
//! | response, any other status         | `None`      | nested message from body |
//! | transport error, timeout code      | `None`      | [`MSG_TIMEOUT`]          |
//! | transport error, request was sent  | `None`      | [`MSG_UNRESPONSIVE`]     |
//! | any other transport error          | `None`      | [`MSG_NETWORK`]          |
//!
//! Transport errors are classified in the table's order, so a timed-out
//! request that was also sent reports the timeout.
//!
//! This is the only place API failures reach the user. Callers never handle
//! network errors themselves.

use crate::toast::ToastSender;
use crate::transport::{to_query_params, RawResponse, Transport, TransportError};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Title of every API error toast.
pub const ERROR_TITLE: &str = "请求错误";
/// Client-side timeout.
pub const MSG_TIMEOUT: &str = "请求超时！";
/// The request went out, nothing came back.
pub const MSG_UNRESPONSIVE: &str = "服务器无响应";
/// Fallback for every other transport failure.
pub const MSG_NETWORK: &str = "网络连接失败";
/// Used when a non-200 body has no readable message.
pub const MSG_REQUEST_FAILED: &str = "请求失败";

/// Why a call produced no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A response arrived with a status other than 200.
    Logical { status: u16, message: String },
    Timeout,
    Unresponsive,
    Network,
}

impl Failure {
    /// Picks exactly one failure class for a transport error.
    pub fn classify(error: &TransportError) -> Self {
        if error.is_timeout() {
            Failure::Timeout
        } else if error.has_request() {
            Failure::Unresponsive
        } else {
            Failure::Network
        }
    }

    /// Builds the logical failure for a non-200 response.
    pub fn from_response(response: &RawResponse) -> Self {
        Failure::Logical {
            status: response.status,
            message: nested_message(&response.data)
                .unwrap_or(MSG_REQUEST_FAILED)
                .to_string(),
        }
    }

    /// The toast description shown to the user.
    pub fn description(&self) -> &str {
        match self {
            Failure::Logical { message, .. } => message,
            Failure::Timeout => MSG_TIMEOUT,
            Failure::Unresponsive => MSG_UNRESPONSIVE,
            Failure::Network => MSG_NETWORK,
        }
    }
}

/// Reads the error message out of a failure payload.
///
/// Looks at `error.message` first, then a top-level `message`.
pub fn nested_message(data: &Value) -> Option<&str> {
    data.pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| data.get("message").and_then(Value::as_str))
}

/// The normalizing API client shared by all endpoint clients.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    toasts: ToastSender,
}

impl ApiClient {
    pub fn new(transport: impl Transport + 'static, toasts: ToastSender) -> Self {
        Self::from_arc(Arc::new(transport), toasts)
    }

    pub fn from_arc(transport: Arc<dyn Transport>, toasts: ToastSender) -> Self {
        Self { transport, toasts }
    }

    /// Issues one GET and normalizes the outcome.
    #[instrument(skip(self, query))]
    pub async fn get<Q>(&self, path: &str, query: &Q) -> Option<Value>
    where
        Q: Serialize + Debug + Sync + ?Sized,
    {
        debug!(?query, "get called");
        let outcome = match to_query_params(query) {
            Ok(params) => self.transport.get(path, &params).await,
            Err(e) => Err(e),
        };
        self.normalize(outcome)
    }

    /// Applies the normalization rules to a finished call.
    pub fn normalize(&self, outcome: Result<RawResponse, TransportError>) -> Option<Value> {
        let failure = match outcome {
            Ok(response) if response.status == 200 => return Some(response.data),
            Ok(response) => Failure::from_response(&response),
            Err(e) => {
                debug!(error = %e, code = ?e.code, "Transport failed");
                Failure::classify(&e)
            }
        };

        warn!(?failure, "Request failed");
        self.toasts.error(ERROR_TITLE, failure.description());
        None
    }
}
