//! HTTP transport layer.
//!
//! This module defines the seam between the API clients and the network:
//!
//! - [`Transport`] - Trait every transport implements (one generic `get`)
//! - [`HttpTransport`] - The production transport built on `reqwest`
//! - [`mock::MockTransport`] - In-memory transport with expectations, for tests
//! - [`TransportError`] - What a failed call reports
//!
//! A transport only moves bytes. It never decides whether a response is a
//! success; that is the job of the [`ApiClient`](crate::normalizer::ApiClient).

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::HttpTransport;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Query string pairs in the order they were serialized.
pub type QueryParams = Vec<(String, String)>;

/// A response that reached the client, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub data: Value,
}

impl RawResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    pub fn ok(data: Value) -> Self {
        Self::new(200, data)
    }
}

/// A transport capable of issuing GET requests relative to a base address.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one GET to `path` with `params` as the query string.
    async fn get(&self, path: &str, params: &QueryParams) -> Result<RawResponse, TransportError>;
}

/// Flattens a serializable struct into query pairs.
///
/// Top-level `null` fields are skipped, so `Option::None` never reaches the
/// wire. Scalars are written as their plain text form.
pub fn to_query_params<Q: Serialize + ?Sized>(query: &Q) -> Result<QueryParams, TransportError> {
    let value = serde_json::to_value(query)
        .map_err(|e| TransportError::new(format!("Invalid query parameters: {e}")))?;

    let Value::Object(map) = value else {
        return Err(TransportError::new(
            "Query parameters must serialize to an object",
        ));
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            Some((key, text))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Query {
        page: u32,
        size: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        order: Option<String>,
        tag: Option<String>,
    }

    #[test]
    fn test_query_params_skip_nulls() {
        let query = Query {
            page: 2,
            size: 20,
            order: None,
            tag: None,
        };
        let mut params = to_query_params(&query).unwrap();
        params.sort();
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "2".to_string()),
                ("size".to_string(), "20".to_string())
            ]
        );
    }

    #[test]
    fn test_query_params_keep_strings_verbatim() {
        let query = Query {
            page: 1,
            size: 5,
            order: Some("desc".to_string()),
            tag: Some("a b".to_string()),
        };
        let params = to_query_params(&query).unwrap();
        assert!(params.contains(&("order".to_string(), "desc".to_string())));
        assert!(params.contains(&("tag".to_string(), "a b".to_string())));
    }

    #[test]
    fn test_query_params_reject_non_objects() {
        assert!(to_query_params(&json!([1, 2])).is_err());
        assert!(to_query_params(&7).is_err());
    }
}
