//! Portfolio Web
//!
//! Server-rendered pages and form endpoints over `portfolio-core`:
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/` | project list |
//! | GET | `/add-project` | creation form |
//! | POST | `/store-project` | create (multipart) |
//! | GET | `/detail-project/{id}` | one project |
//! | GET | `/edit-project/{id}` | edit form |
//! | POST | `/update-project/{id}` | update (multipart) |
//! | GET | `/delete-project/{id}` | delete |
//! | GET | `/contact` | contact page |
//! | GET | `/public/*` | static files |

pub mod error;
pub mod form;
pub mod handlers;
pub mod state;
pub mod views;

use std::future::Future;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use portfolio_core::config::Config;
use portfolio_core::storage::PUBLIC_MOUNT;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

pub use error::AppError;
pub use state::AppState;

/// Build the application router
pub fn router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/add-project", get(handlers::add_project))
        .route("/store-project", post(handlers::store_project))
        .route("/detail-project/:id", get(handlers::detail_project))
        .route("/edit-project/:id", get(handlers::edit_project))
        .route("/update-project/:id", post(handlers::update_project))
        .route("/delete-project/:id", get(handlers::delete_project))
        .route("/contact", get(handlers::contact))
        .nest_service(
            &format!("/{}", PUBLIC_MOUNT),
            ServeDir::new(&config.storage.public_dir),
        )
        .layer(DefaultBodyLimit::max(config.server.max_upload_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    config: &Config,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state, config);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    let state = AppState::from_config(config)?;

    info!(
        address = %address,
        public_dir = %config.storage.public_dir.display(),
        upload_dir = %config.storage.upload_dir.display(),
        projects = state.projects.len().await,
        "Server listening"
    );

    serve_with_shutdown(listener, state, config, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    })
    .await
}
