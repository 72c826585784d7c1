//! # Record Client
//!
//! Lists records from the backend.
use crate::clients::endpoint::ResourceEndpoint;
use crate::model::ListQuery;
use crate::normalizer::ApiClient;

/// Client for the records list.
#[derive(Clone)]
pub struct RecordClient {
    inner: ApiClient,
}

impl RecordClient {
    pub fn new(inner: ApiClient) -> Self {
        Self { inner }
    }
}

impl ResourceEndpoint for RecordClient {
    type Query = ListQuery;

    const PATH: &'static str = "m2/6452962-6151685-default/303123483";

    fn inner(&self) -> &ApiClient {
        &self.inner
    }
}
