//! # Transport Errors
//!
//! A failed call carries two independent signals: an optional [`ErrorCode`]
//! and an optional [`SentRequest`]. Both may be present at once (a timed-out
//! request was still sent), so classification lives in the normalizer rather
//! than in the error type.

use std::fmt;

/// Machine-readable reason a transport call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The client aborted the call after its configured timeout elapsed.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// A response arrived but its body could not be read or decoded.
    Decode,
    /// Anything else the HTTP stack reports.
    Other(String),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Timeout => write!(f, "timeout"),
            ErrorCode::Connect => write!(f, "connect"),
            ErrorCode::Decode => write!(f, "decode"),
            ErrorCode::Other(code) => write!(f, "{code}"),
        }
    }
}

/// The request that was dispatched before the call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub method: String,
    pub url: String,
}

impl SentRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
        }
    }
}

/// A transport-level failure: no usable HTTP response was produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Transport error: {message}")]
pub struct TransportError {
    pub code: Option<ErrorCode>,
    pub request: Option<SentRequest>,
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            request: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_request(mut self, request: SentRequest) -> Self {
        self.request = Some(request);
        self
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.code, Some(ErrorCode::Timeout))
    }

    /// The request went out but nothing came back.
    pub fn has_request(&self) -> bool {
        self.request.is_some()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        let err = TransportError::new(e.to_string());

        if e.is_timeout() {
            err.with_code(ErrorCode::Timeout)
                .with_request(SentRequest::get(url))
        } else if e.is_connect() {
            err.with_code(ErrorCode::Connect)
                .with_request(SentRequest::get(url))
        } else if e.is_request() {
            err.with_request(SentRequest::get(url))
        } else if e.is_decode() || e.is_body() {
            err.with_code(ErrorCode::Decode)
        } else {
            err.with_code(ErrorCode::Other(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_independent_signals() {
        let err = TransportError::new("boom")
            .with_code(ErrorCode::Timeout)
            .with_request(SentRequest::get("http://127.0.0.1:4523/x"));

        assert!(err.is_timeout());
        assert!(err.has_request());
        assert_eq!(err.request.unwrap().method, "GET");
    }

    #[test]
    fn test_display() {
        let err = TransportError::new("refused").with_code(ErrorCode::Connect);
        assert_eq!(err.to_string(), "Transport error: refused");
        assert_eq!(ErrorCode::Other("EPIPE".into()).to_string(), "EPIPE");
    }
}
