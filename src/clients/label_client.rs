use crate::clients::endpoint::ResourceEndpoint;
use crate::model::ListQuery;
use crate::normalizer::ApiClient;

#[derive(Clone)]
pub struct LabelClient {
    inner: ApiClient,
}

impl LabelClient {
    pub fn new(inner: ApiClient) -> Self {
        Self { inner }
    }
}

impl ResourceEndpoint for LabelClient {
    type Query = ListQuery;

    const PATH: &'static str = "m2/6452962-6151685-default/301081172";

    fn inner(&self) -> &ApiClient {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast;
    use crate::transport::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_sends_only_page_and_size() {
        let mock = MockTransport::new();
        let (tx, _rx) = toast::channel();
        let labels = LabelClient::new(ApiClient::new(mock.clone(), tx));
        mock.expect_get(LabelClient::PATH).return_ok(200, json!({ "list": ["rust"] }));

        let result = labels.get_data(&ListQuery::new(3, 50)).await;

        assert_eq!(result, Some(json!({ "list": ["rust"] })));
        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "m2/6452962-6151685-default/301081172");
        let mut params = calls[0].params.clone();
        params.sort();
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "3".to_string()),
                ("size".to_string(), "50".to_string())
            ]
        );
        mock.verify();
    }
}
