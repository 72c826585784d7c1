use crate::normalizer::ApiClient;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

/// Trait for resource-specific clients to inherit the list query.
///
/// Each implementor names its fixed backend path and its query type; the
/// provided [`get_data`](ResourceEndpoint::get_data) does the rest.
#[async_trait]
pub trait ResourceEndpoint: Send + Sync {
    /// Parameters forwarded as the query string.
    type Query: Serialize + Debug + Send + Sync;

    /// Fixed backend path, relative to the API base address.
    const PATH: &'static str;

    /// Access the shared normalizing client.
    fn inner(&self) -> &ApiClient;

    /// Fetches one page. `None` means the call failed and the user was notified.
    #[tracing::instrument(skip(self), fields(path = Self::PATH))]
    async fn get_data(&self, query: &Self::Query) -> Option<Value> {
        tracing::debug!("Sending request");
        self.inner().get(Self::PATH, query).await
    }
}
