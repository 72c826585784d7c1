use crate::clients::{ArticleClient, LabelClient, PhotoClient, RecordClient};
use crate::config::AppConfig;
use crate::normalizer::ApiClient;
use crate::router::{Navigator, RouteTable};
use crate::theme::{DocumentRoot, ThemeStore};
use crate::toast::{self, ToastReceiver};
use crate::transport::{HttpTransport, Transport, TransportError};
use tracing::info;

/// Everything a UI shell needs, wired together from one [`AppConfig`].
///
/// `BlogApp` is responsible for:
/// - **Transport Wiring**: One shared transport behind one [`ApiClient`]
/// - **Endpoint Clients**: Articles, labels, photos and records
/// - **Shell State**: The navigator, the theme store and the toast receiver
///
/// # Example
///
/// ```ignore
/// let config = AppConfig::load(None)?;
/// let mut app = BlogApp::new(&config, MemoryDocument::new())?;
///
/// let page = app.articles.get_data(&ListQuery::new(1, 10)).await;
/// app.navigator.push("/photos");
/// app.theme.toggle_mode();
///
/// for toast in app.toasts().drain() {
///     // render it
/// }
/// ```
pub struct BlogApp<D: DocumentRoot> {
    pub articles: ArticleClient,
    pub labels: LabelClient,
    pub photos: PhotoClient,
    pub records: RecordClient,
    pub navigator: Navigator,
    pub theme: ThemeStore<D>,
    toasts: ToastReceiver,
}

impl<D: DocumentRoot> BlogApp<D> {
    /// Builds the app on the real HTTP transport.
    pub fn new(config: &AppConfig, document: D) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.api)?;
        info!(
            base_url = %transport.base_url(),
            timeout_secs = config.api.timeout_secs,
            "HTTP transport ready"
        );
        Ok(Self::with_transport(transport, config, document))
    }

    /// Builds the app on any transport. Tests pass a mock here.
    pub fn with_transport(
        transport: impl Transport + 'static,
        config: &AppConfig,
        document: D,
    ) -> Self {
        let (toast_tx, toast_rx) = toast::channel();
        let api = ApiClient::new(transport, toast_tx);

        Self {
            articles: ArticleClient::new(api.clone()),
            labels: LabelClient::new(api.clone()),
            photos: PhotoClient::new(api.clone()),
            records: RecordClient::new(api),
            navigator: Navigator::new(RouteTable::new(), &config.router.base_path),
            theme: ThemeStore::new(document),
            toasts: toast_rx,
        }
    }

    /// Error notifications raised by the API clients.
    pub fn toasts(&mut self) -> &mut ToastReceiver {
        &mut self.toasts
    }
}
