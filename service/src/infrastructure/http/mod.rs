use anyhow::Context;
use axum::Router;
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;

use crate::domain::AppState;
use crate::infrastructure::http::handlers::{health_check, pages, questions};
use tokio::net;

mod api;
mod handlers;
pub mod routes;


/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

/// The application's HTTP server. The underlying HTTP package is opaque to module consumers.
pub struct HttpServer {
    router: axum::Router,
    listener: net::TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(state: impl AppState, config: HttpServerConfig<'_>) -> anyhow::Result<Self> {
        // see: https://github.com/metrics-rs/metrics
        // see: https://github.com/Ptrskay3/axum-prometheus
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

        let router = app_router(state)
            .route(
                "/metrics",
                get(move || {
                    let metric_handle = metric_handle.clone();
                    async move { metric_handle.render() }
                }),
            )
            .layer(prometheus_layer);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server.
    pub async fn run(self) -> anyhow::Result<()> {
        let local_addr = self
            .listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::info!("listening on {}", local_addr);

        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

/// Pages, api and health routes with request tracing, metrics excluded.
pub fn app_router<S: AppState>(state: S) -> Router {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        },
    );

    Router::new()
        .route("/health", get(health_check))
        .merge(page_routes())
        .nest("/api", api_routes())
        .layer(trace_layer)
        .with_state(state)
}

fn page_routes<S: AppState>() -> Router<S> {
    Router::new()
        .route(routes::INDEX, get(pages::index::<S>))
        .route(routes::DETAIL, get(pages::detail::<S>))
}

fn api_routes<S: AppState>() -> Router<S> {
    Router::new()
        .route(
            routes::API_QUESTIONS,
            get(questions::list_questions::<S>).post(questions::create_question::<S>),
        )
        .route(routes::API_QUESTION, get(questions::find_question_by_id::<S>))
}
