//! Libris API Server
//!
//! A lending-library catalogue API: authors, books, libraries and
//! librarians. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresAuthorRepository, PostgresBookRepository, PostgresLibraryRepository,
    PostgresUserRepository,
};
use app::{AccountService, AuthorService, BookService, LibraryService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService<PostgresAuthorRepository, PostgresBookRepository>>,
    pub book_service: Arc<BookService<PostgresBookRepository, PostgresAuthorRepository>>,
    pub library_service: Arc<LibraryService<PostgresLibraryRepository, PostgresBookRepository>>,
    pub account_service: Arc<AccountService<PostgresUserRepository>>,
    pub config: Config,
}

// Lets the auth middleware extract the account service on its own
impl axum::extract::FromRef<AppState> for Arc<AccountService<PostgresUserRepository>> {
    fn from_ref(state: &AppState) -> Self {
        state.account_service.clone()
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,libris_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Libris API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let author_repo = Arc::new(PostgresAuthorRepository::new(db.clone()));
    let book_repo = Arc::new(PostgresBookRepository::new(db.clone()));
    let library_repo = Arc::new(PostgresLibraryRepository::new(db.clone()));
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));

    // Create application services
    let author_service = Arc::new(AuthorService::new(author_repo.clone(), book_repo.clone()));
    let book_service = Arc::new(BookService::new(book_repo.clone(), author_repo.clone()));
    let library_service = Arc::new(LibraryService::new(library_repo.clone(), book_repo.clone()));
    let account_service = Arc::new(AccountService::new(user_repo.clone()));

    // Create app state
    let state = AppState {
        author_service,
        book_service,
        library_service,
        account_service,
        config: config.clone(),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from reverse proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited routes (registration)
    let rate_limited_routes = Router::new()
        .route("/accounts/register", post(handlers::register))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public read endpoints
        .route("/books", get(handlers::list_books))
        .route("/books/:id", get(handlers::get_book))
        .route("/authors", get(handlers::list_authors))
        .route("/authors/:id", get(handlers::get_author))
        .route("/libraries", get(handlers::list_libraries))
        .route("/libraries/:id", get(handlers::get_library))
        .route("/libraries/:id/librarian", get(handlers::get_librarian))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Protected routes
        .nest(
            "/",
            Router::new()
                .route("/books", post(handlers::create_book))
                .route(
                    "/books/:id",
                    put(handlers::update_book).delete(handlers::delete_book),
                )
                .route("/authors", post(handlers::create_author))
                .route(
                    "/authors/:id",
                    put(handlers::update_author).delete(handlers::delete_author),
                )
                .route("/libraries", post(handlers::create_library))
                .route("/libraries/:id", delete(handlers::delete_library))
                .route("/libraries/:id/books", post(handlers::add_library_book))
                .route(
                    "/libraries/:id/books/:book_id",
                    delete(handlers::remove_library_book),
                )
                .route(
                    "/libraries/:id/librarian",
                    put(handlers::assign_librarian),
                )
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::auth_middleware::<PostgresUserRepository>,
                )),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
