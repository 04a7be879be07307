//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all product routes
//! - Wire up the request pipeline (panic catching, request ID, body parsing,
//!   logging, authentication)
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::{PaginationConfig, ServiceConfig};
use crate::http::error::panic_response;
use crate::http::handlers::{
    create_product, delete_product, get_product, list_products, method_not_allowed,
    product_stats, route_not_found, search_products, update_product,
};
use crate::http::middleware::{log_request, parse_json_body, require_api_key};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::store::ProductStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProductStore>,
    pub pagination: Arc<PaginationConfig>,
}

/// HTTP server for the products API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: Arc<ProductStore>,
}

impl HttpServer {
    /// Create a server with a fresh store (seeded if the config says so).
    pub fn new(config: ServiceConfig) -> Self {
        let store = if config.seed_catalog {
            ProductStore::seeded()
        } else {
            ProductStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server over an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<ProductStore>) -> Self {
        let router = Self::build_router(&config, store.clone());
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with the full request pipeline.
    pub fn build_router(config: &ServiceConfig, store: Arc<ProductStore>) -> Router {
        let state = AppState {
            store,
            pagination: Arc::new(config.pagination.clone()),
        };

        let routes = Router::new()
            .route("/api/products", get(list_products).post(create_product))
            .route("/api/products/search", get(search_products))
            .route("/api/products/stats", get(product_stats))
            .route(
                "/api/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            // Must follow the routes: it only applies to method routers already added.
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(route_not_found);

        Self::with_pipeline(routes, config).with_state(state)
    }

    /// Wrap `routes` in the request pipeline.
    ///
    /// Layers run top to bottom: a request is parsed, logged and authenticated
    /// before it reaches a handler or a fallback. Panics anywhere below are
    /// turned into the standard 500 response.
    pub fn with_pipeline(routes: Router<AppState>, config: &ServiceConfig) -> Router<AppState> {
        routes.layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(set_request_id_layer())
                .layer(propagate_request_id_layer())
                .layer(middleware::from_fn_with_state(
                    config.limits.clone(),
                    parse_json_body,
                ))
                .layer(middleware::from_fn(log_request))
                .layer(middleware::from_fn_with_state(
                    config.auth.clone(),
                    require_api_key,
                )),
        )
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            products = self.store.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Shared handle to the product store.
    pub fn store(&self) -> Arc<ProductStore> {
        self.store.clone()
    }

    /// The assembled router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
