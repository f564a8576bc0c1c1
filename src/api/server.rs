//! # API HTTP Server
//!
//! Axum-based HTTP server for the brewery query endpoints.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;
use crate::model::BreweryRecord;
use crate::observability::Logger;
use crate::query::{compose, Predicate, QueryExpression};
use crate::store::RecordStore;

use super::errors::ApiError;
use super::params::{ListingParams, SearchParams};
use super::response::{Page, SingleResponse};

/// API server state
pub struct ApiServer<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore + 'static> ApiServer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the Axum router
    pub fn router(self, config: &ServerConfig) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<axum::http::HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new().allow_origin(AllowOrigin::list(origins))
        };

        let state = Arc::new(self);

        Router::new()
            .route("/breweries", get(list_handler))
            .route("/breweries/search", get(search_handler))
            .route("/breweries/:id", get(get_handler))
            .layer(cors)
            .with_state(state)
    }

    /// Bind and serve until shutdown
    pub async fn serve(self, config: &ServerConfig) -> io::Result<()> {
        let addr = config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        Logger::info("server_started", &[("addr", addr.as_str())]);

        axum::serve(listener, self.router(config)).await
    }
}

/// Shared state type
type ServerState<S> = Arc<ApiServer<S>>;

/// Listing handler: optional filters, optional sort, paginated
async fn list_handler<S: RecordStore + 'static>(
    State(server): State<ServerState<S>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Page<BreweryRecord>>, ApiError> {
    let params = ListingParams::parse(&raw)?;

    let expr = compose(&params.criteria, server.store.as_ref())
        .await
        .map_err(|e| {
            Logger::warn("request_rejected", &[("reason", &e.to_string())]);
            ApiError::from(e)
        })?;

    let window = server.store.find(&expr, params.page).await;
    Logger::info(
        "query_executed",
        &[
            ("predicates", &expr.predicates().len().to_string()),
            ("total", &window.total.to_string()),
        ],
    );

    Ok(Json(Page::from_window(window, params.page)))
}

/// Single record handler: exactly one record or a not-found signal
async fn get_handler<S: RecordStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<SingleResponse<BreweryRecord>>, ApiError> {
    let record = server.store.get(id).await.ok_or(ApiError::NotFound(id))?;
    Ok(Json(SingleResponse::new(record)))
}

/// Free-text name search handler.
///
/// Zero matches yields an explicit not-found signal rather than an empty
/// page; the total count decides, not the shape of the query.
async fn search_handler<S: RecordStore + 'static>(
    State(server): State<ServerState<S>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<Page<BreweryRecord>>, ApiError> {
    let params = SearchParams::parse(&raw)?;

    let expr = QueryExpression::all().and(Predicate::NameContains(params.query.clone()));
    let window = server.store.find(&expr, params.page).await;

    if window.total == 0 {
        Logger::warn("search_no_match", &[("query", params.query.as_str())]);
        return Err(ApiError::NoMatch(params.query));
    }

    Ok(Json(Page::from_window(window, params.page)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_router_builds() {
        let server = ApiServer::new(MemoryStore::new());
        let _router = server.router(&ServerConfig::default());
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let server = ApiServer::new(MemoryStore::new());
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = server.router(&config);
    }
}
