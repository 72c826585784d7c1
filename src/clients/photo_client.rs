//! # Photo Client
//!
//! Lists photos from the backend. Unlike the other lists, the photo query
//! carries an optional `order` that is passed through untouched.
use crate::clients::endpoint::ResourceEndpoint;
use crate::model::PhotoQuery;
use crate::normalizer::ApiClient;

/// Client for the photos list.
#[derive(Clone)]
pub struct PhotoClient {
    inner: ApiClient,
}

impl PhotoClient {
    pub fn new(inner: ApiClient) -> Self {
        Self { inner }
    }
}

impl ResourceEndpoint for PhotoClient {
    type Query = PhotoQuery;

    const PATH: &'static str = "m2/6452962-6151685-default/300450857";

    fn inner(&self) -> &ApiClient {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PhotoQuery;
    use crate::toast;
    use crate::transport::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_order_is_forwarded_verbatim() {
        let mock = MockTransport::new();
        let (tx, _rx) = toast::channel();
        let photos = PhotoClient::new(ApiClient::new(mock.clone(), tx));
        mock.expect_get(PhotoClient::PATH).return_ok(200, json!({ "list": [] }));
        mock.expect_get(PhotoClient::PATH).return_ok(200, json!({ "list": [] }));

        photos
            .get_data(&PhotoQuery::new(1, 9).with_order("createTime,DESC"))
            .await;
        photos.get_data(&PhotoQuery::new(1, 9)).await;

        let calls = mock.calls();
        let mut ordered = calls[0].params.clone();
        ordered.sort();
        assert_eq!(
            ordered,
            vec![
                ("order".to_string(), "createTime,DESC".to_string()),
                ("page".to_string(), "1".to_string()),
                ("size".to_string(), "9".to_string())
            ]
        );
        let mut unordered = calls[1].params.clone();
        unordered.sort();
        assert_eq!(
            unordered,
            vec![
                ("page".to_string(), "1".to_string()),
                ("size".to_string(), "9".to_string())
            ]
        );
        mock.verify();
    }
}
