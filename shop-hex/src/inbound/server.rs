//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use shop_types::{PaymentGateway, StoreRepository};

use super::handlers::{self, AppState};
use crate::ShopService;
use crate::openapi::ApiDoc;

/// HTTP Server for the storefront API.
pub struct HttpServer<R: StoreRepository, P: PaymentGateway> {
    state: Arc<AppState<R, P>>,
}

impl<R: StoreRepository, P: PaymentGateway> HttpServer<R, P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: ShopService<R, P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        let api = Router::new()
            .route(
                "/create-checkout-session",
                post(handlers::create_checkout_session::<R, P>),
            )
            .route("/add_user", post(handlers::add_user::<R, P>))
            .route("/get/user", post(handlers::get_user::<R, P>))
            .route("/check/discount", post(handlers::check_discount::<R, P>))
            .route("/get/ratings", post(handlers::get_ratings::<R, P>))
            .route("/set/add_review", post(handlers::add_review::<R, P>))
            .route("/set/add_rewiew", post(handlers::add_review::<R, P>))
            .route("/get/article", post(handlers::get_article::<R, P>))
            .route("/get/article_topic", post(handlers::get_article_topic::<R, P>))
            .route("/get/topics", post(handlers::get_topics::<R, P>))
            .route("/get/collection", post(handlers::get_collection::<R, P>))
            .route("/get/collections", post(handlers::get_collections::<R, P>))
            .route("/get/item", post(handlers::get_item::<R, P>))
            .route("/get/items", post(handlers::get_items::<R, P>))
            .route(
                "/get/items_collection",
                post(handlers::get_items_collection::<R, P>),
            )
            .route("/get/cart_user", post(handlers::get_cart_user::<R, P>))
            .route("/get/cart", post(handlers::get_cart::<R, P>))
            .route("/add/cart", post(handlers::add_cart::<R, P>))
            .route("/add/cart_user", post(handlers::add_cart_user::<R, P>))
            .route("/add/cart_item", post(handlers::add_cart_item::<R, P>))
            .route("/rm/cart_item", post(handlers::rm_cart_item::<R, P>))
            .route("/get/cart_items", post(handlers::get_cart_items::<R, P>))
            .route(
                "/update/cart_variant",
                post(handlers::update_cart_variant::<R, P>),
            )
            .route(
                "/update/cart_amount",
                post(handlers::update_cart_amount::<R, P>),
            )
            .route("/get/variant", post(handlers::get_variant::<R, P>))
            .route("/get/variants", post(handlers::get_variants::<R, P>))
            .route("/get/variant_image", post(handlers::get_variant_image::<R, P>));

        Router::new()
            .route("/health", get(handlers::health))
            .route("/buy", get(handlers::buy::<R, P>))
            .route(
                "/api-docs/openapi.json",
                get(|| async { Json(ApiDoc::openapi()) }),
            )
            .nest("/api", api)
            .layer(metrics)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
