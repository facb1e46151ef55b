//! HTTP server wiring for Lukulasi (content library and PDF upload API).

/// HTTP error mapping for API handlers.
pub mod error;
/// PDF extraction behind the core collaborator seam.
pub mod extractor;
/// HTTP handlers for content and upload endpoints.
pub mod handlers;

pub use extractor::PdfExtractor;
pub use lukulasi_core::{config, content, extract, AppError, Config, DEFAULT_PORT};

use axum::{
    extract::DefaultBodyLimit,
    http::header,
    routing::{get, post},
    Router,
};
use hyper::HeaderMap;
use lukulasi_core::content::ContentLibrary;
use lukulasi_core::extract::DocumentExtractor;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub library: Arc<ContentLibrary>,
    pub extractor: Arc<dyn DocumentExtractor>,
}

impl AppState {
    /// Construct shared application state with the PDF extractor.
    ///
    /// # Returns
    /// A new [`AppState`].
    pub fn new(config: Config) -> Self {
        let extractor = Arc::new(PdfExtractor::new(
            config.max_upload_size,
            config.max_text_len,
        ));
        Self::with_extractor(config, extractor)
    }

    /// Construct shared application state with a custom extractor.
    ///
    /// # Returns
    /// A new [`AppState`] wired to the provided extractor.
    pub fn with_extractor(config: Config, extractor: Arc<dyn DocumentExtractor>) -> Self {
        let library = Arc::new(ContentLibrary::new(config.content_dir.clone()));
        Self {
            config: Arc::new(config),
            library,
            extractor,
        }
    }
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
///
/// # Returns
/// Configured `axum::Router`.
///
/// # Panics
/// Panics if static header values fail to parse (should not happen).
pub fn create_app(state: AppState, allow_public_access: bool) -> Router {
    let cors_port = state.config.port;

    let mut default_headers = HeaderMap::new();
    default_headers.insert(header::X_CONTENT_TYPE_OPTIONS, "nosniff".parse().unwrap());
    default_headers.insert(header::X_FRAME_OPTIONS, "DENY".parse().unwrap());

    let cors = if allow_public_access {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers(tower_http::cors::Any)
    } else {
        CorsLayer::new()
            .allow_origin([
                format!("http://localhost:{}", cors_port).parse().unwrap(),
                format!("http://127.0.0.1:{}", cors_port).parse().unwrap(),
            ])
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    };

    // The body limit sits slightly above the extractor's own size gate so
    // oversized uploads surface as the typed FileTooLarge error instead of a
    // bare 413.
    let body_limit = state.config.max_upload_size.saturating_add(1024);

    Router::new()
        .route("/api/content", get(handlers::content::list_content))
        .route("/api/content/:id", get(handlers::content::get_content))
        .route("/api/pdf-upload", post(handlers::upload::upload_pdf))
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(body_limit))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    default_headers
                        .get(header::X_CONTENT_TYPE_OPTIONS)
                        .unwrap()
                        .clone(),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    default_headers.get(header::X_FRAME_OPTIONS).unwrap().clone(),
                )),
        )
}

/// Resolve the listener address from env var overrides and security policy.
///
/// # Arguments
/// - `config`: Server configuration containing the configured `port`.
/// - `allow_public_access`: Whether non-loopback bind targets are permitted.
///
/// # Returns
/// A validated socket address that enforces loopback when public access is disabled.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match std::env::var("BIND") {
        Ok(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        Err(_) => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

/// Run the Axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Returns
/// `Ok(())` when the server exits cleanly.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    allow_public_access: bool,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state, allow_public_access);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
