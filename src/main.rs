//! # Blog Client Demo
//!
//! Exercises the client end to end against the configured backend:
//! 1. Loads [`AppConfig`] (optional `blog.toml`, then `BLOG_*` env vars).
//! 2. Fetches the first page of every list.
//! 3. Navigates a few routes and toggles the theme.
//! 4. Prints any error toasts the normalizer raised.

use blog_client::clients::ResourceEndpoint;
use blog_client::config::AppConfig;
use blog_client::lifecycle::{setup_tracing, BlogApp};
use blog_client::model::{ListQuery, PhotoQuery};
use blog_client::theme::{DocumentRoot, MemoryDocument, THEME_ATTRIBUTE};
use std::path::Path;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config_path = Path::new("blog.toml");
    let config = AppConfig::load(config_path.exists().then_some(config_path))
        .map_err(|e| e.to_string())?;

    setup_tracing(&config.logging.level);
    info!("Starting blog client");

    let mut app = BlogApp::new(&config, MemoryDocument::new()).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("initial_load");
    async {
        let query = ListQuery::new(1, 10);
        report("articles", app.articles.get_data(&query).await);
        report("labels", app.labels.get_data(&query).await);
        report("records", app.records.get_data(&query).await);
        report(
            "photos",
            app.photos
                .get_data(&PhotoQuery::new(1, 10).with_order("desc"))
                .await,
        );
    }
    .instrument(span)
    .await;

    for location in ["/photos", "/article", "/nowhere"] {
        let navigation = app.navigator.push(location);
        info!(
            location,
            view = ?navigation.route.view(),
            scroll_top = navigation.scroll.top,
            "Navigated"
        );
    }
    if let Some(back) = app.navigator.back() {
        info!(view = ?back.route.view(), "Went back");
    }

    app.theme.toggle_mode();
    info!(
        is_night = app.theme.is_night(),
        data_theme = app.theme.document().attribute(THEME_ATTRIBUTE).unwrap_or("unset"),
        "Theme state"
    );

    for toast in app.toasts().drain() {
        warn!(title = %toast.title, description = %toast.description, "Toast");
    }

    info!("Blog client demo finished");
    Ok(())
}

fn report(resource: &str, page: Option<serde_json::Value>) {
    match page {
        Some(payload) => info!(resource, payload = %payload, "Loaded"),
        None => warn!(resource, "No data"),
    }
}
