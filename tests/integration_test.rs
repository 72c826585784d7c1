use blog_client::clients::{ArticleClient, LabelClient, PhotoClient, RecordClient, ResourceEndpoint};
use blog_client::config::AppConfig;
use blog_client::lifecycle::BlogApp;
use blog_client::model::{ListQuery, PhotoQuery};
use blog_client::normalizer::{ERROR_TITLE, MSG_NETWORK, MSG_TIMEOUT, MSG_UNRESPONSIVE};
use blog_client::router::View;
use blog_client::theme::{DocumentRoot, MemoryDocument, THEME_ATTRIBUTE};
use blog_client::transport::mock::MockTransport;
use blog_client::transport::{ErrorCode, SentRequest, TransportError};
use serde_json::json;

fn app() -> (BlogApp<MemoryDocument>, MockTransport) {
    let mock = MockTransport::new();
    let app = BlogApp::with_transport(mock.clone(), &AppConfig::default(), MemoryDocument::new());
    (app, mock)
}

/// A full session against a mocked backend: every list, a failure of each
/// class, some navigation and a theme round trip.
#[tokio::test]
async fn test_full_session() {
    let (mut app, mock) = app();

    mock.expect_get(ArticleClient::PATH)
        .return_ok(200, json!({ "list": [{ "id": 1 }], "total": 1 }));
    mock.expect_get(LabelClient::PATH)
        .return_ok(200, json!({ "list": ["rust", "vue"] }));
    mock.expect_get(PhotoClient::PATH)
        .return_ok(200, json!({ "list": [] }));
    mock.expect_get(RecordClient::PATH)
        .return_ok(500, json!({ "error": { "message": "数据库不可用" } }));

    let query = ListQuery::new(1, 10);
    let articles = app.articles.get_data(&query).await;
    let labels = app.labels.get_data(&query).await;
    let photos = app
        .photos
        .get_data(&PhotoQuery::new(1, 10).with_order("asc"))
        .await;
    let records = app.records.get_data(&query).await;

    assert_eq!(articles, Some(json!({ "list": [{ "id": 1 }], "total": 1 })));
    assert_eq!(labels, Some(json!({ "list": ["rust", "vue"] })));
    assert_eq!(photos, Some(json!({ "list": [] })));
    assert_eq!(records, None);

    let toasts = app.toasts().drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, ERROR_TITLE);
    assert_eq!(toasts[0].description, "数据库不可用");

    let paths: Vec<_> = mock.calls().into_iter().map(|c| c.path).collect();
    assert_eq!(
        paths,
        vec![
            ArticleClient::PATH,
            LabelClient::PATH,
            PhotoClient::PATH,
            RecordClient::PATH
        ]
    );
    mock.verify();

    assert_eq!(app.navigator.current().view(), View::Home);
    assert_eq!(app.navigator.push("/photos").route.view(), View::Photos);
    assert!(app.navigator.push("/missing").route.is_not_found());

    app.theme.toggle_mode();
    assert_eq!(app.theme.document().attribute(THEME_ATTRIBUTE), Some("dark"));
    app.theme.toggle_mode();
    assert_eq!(app.theme.document().attribute(THEME_ATTRIBUTE), Some("light"));
}

#[tokio::test]
async fn test_each_transport_failure_class() {
    let (mut app, mock) = app();
    let sent = SentRequest::get("http://127.0.0.1:4523/m2/6452962-6151685-default/301081172");

    mock.expect_get(LabelClient::PATH).return_err(
        TransportError::new("timeout")
            .with_code(ErrorCode::Timeout)
            .with_request(sent.clone()),
    );
    mock.expect_get(LabelClient::PATH)
        .return_err(TransportError::new("socket hang up").with_request(sent));
    mock.expect_get(LabelClient::PATH)
        .return_err(TransportError::new("bad body").with_code(ErrorCode::Decode));

    for _ in 0..3 {
        assert_eq!(app.labels.get_data(&ListQuery::default()).await, None);
    }

    let descriptions: Vec<_> = app
        .toasts()
        .drain()
        .into_iter()
        .map(|t| t.description)
        .collect();
    assert_eq!(descriptions, vec![MSG_TIMEOUT, MSG_UNRESPONSIVE, MSG_NETWORK]);
    mock.verify();
}

#[tokio::test]
async fn test_base_path_from_config() {
    let mut config = AppConfig::default();
    config.router.base_path = "/blog/".to_string();
    let mut app = BlogApp::with_transport(MockTransport::new(), &config, MemoryDocument::new());

    assert_eq!(app.navigator.href("archive").as_deref(), Some("/blog/archive"));
    assert_eq!(app.navigator.push("/blog/archive").route.view(), View::Archive);
}
