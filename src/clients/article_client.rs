//! # Article Client
//!
//! Lists articles from the backend.
use crate::clients::endpoint::ResourceEndpoint;
use crate::model::ListQuery;
use crate::normalizer::ApiClient;

/// Client for the articles list.
#[derive(Clone)]
pub struct ArticleClient {
    inner: ApiClient,
}

impl ArticleClient {
    pub fn new(inner: ApiClient) -> Self {
        Self { inner }
    }
}

impl ResourceEndpoint for ArticleClient {
    type Query = ListQuery;

    const PATH: &'static str = "m2/6452962-6151685-default/301081171";

    fn inner(&self) -> &ApiClient {
        &self.inner
    }
}
