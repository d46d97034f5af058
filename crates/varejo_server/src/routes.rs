//! Routing table and request handlers.
//!
//! # Responsibility
//! - Mount one router per resource kind, mirroring the established paths
//!   (`/supplier/id/{id}` and the `/nome/{nome}` searches included).
//! - Translate wire payloads into repository calls; nothing else.
//!
//! # Invariants
//! - Handlers are uniform across resources; per-resource behavior comes
//!   entirely from `EntityKind` configuration.

use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, put};
use axum::Router;
use serde_json::Value;
use std::path::Path as FsPath;
use std::sync::Arc;
use varejo_core::{
    contains_folded, EmptySearch, EntityKind, FieldMap, JsonFileStore, MatchMode, Record,
    RecordRepository, SearchConfig,
};

pub type SharedRepository = Arc<RecordRepository<JsonFileStore>>;

/// Builds the full application router over a data directory.
pub fn build_app(data_dir: &FsPath) -> Router {
    let mut app = Router::new().route("/health", get(health));
    for entity in EntityKind::ALL {
        let repo = Arc::new(RecordRepository::new(
            entity,
            JsonFileStore::for_entity(data_dir, entity),
        ));
        app = app.nest(mount_path(entity), resource_router(repo));
    }
    app
}

/// Mount prefix per resource, matching the established API surface.
fn mount_path(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Users => "/users",
        EntityKind::Products => "/products",
        EntityKind::Stores => "/stores",
        EntityKind::Orders => "/orders",
        EntityKind::Suppliers => "/supplier",
        EntityKind::Campaigns => "/campaign",
    }
}

fn resource_router(repo: SharedRepository) -> Router {
    let entity = repo.entity();

    // Suppliers keep their historical /id/{id} read path.
    let router = match entity {
        EntityKind::Suppliers => Router::new()
            .route("/", get(list_records).post(create_record))
            .route("/id/:id", get(get_record))
            .route("/:id", put(update_record).delete(delete_record)),
        _ => Router::new()
            .route("/", get(list_records).post(create_record))
            .route(
                "/:id",
                get(get_record).put(update_record).delete(delete_record),
            ),
    };

    let router = match entity {
        EntityKind::Stores => router.route("/search/:term", get(search_records)),
        EntityKind::Orders => router.route("/date/:term", get(search_records)),
        EntityKind::Suppliers | EntityKind::Campaigns => {
            router.route("/nome/:term", get(search_records))
        }
        EntityKind::Users | EntityKind::Products => router,
    };

    router.with_state(repo)
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "varejo",
        "version": varejo_core::core_version(),
    }))
}

async fn list_records(
    State(repo): State<SharedRepository>,
) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(repo.list()?))
}

async fn get_record(
    State(repo): State<SharedRepository>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(repo.get(&id)?))
}

async fn create_record(
    State(repo): State<SharedRepository>,
    Json(fields): Json<FieldMap>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    Ok((StatusCode::CREATED, Json(repo.create(fields)?)))
}

async fn update_record(
    State(repo): State<SharedRepository>,
    Path(id): Path<String>,
    Json(fields): Json<FieldMap>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(repo.update(&id, fields)?))
}

async fn delete_record(
    State(repo): State<SharedRepository>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(repo.delete(&id)?))
}

async fn search_records(
    State(repo): State<SharedRepository>,
    Path(term): Path<String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let entity = repo.entity();
    let Some(config) = entity.search() else {
        return Err(ApiError::search_unsupported(entity));
    };

    let matches = repo.find(|record| field_matches(record, config, &term))?;
    if matches.is_empty() {
        return match config.on_empty {
            EmptySearch::EmptyList => Ok(Json(Vec::new())),
            EmptySearch::NotFound => Err(ApiError::no_search_matches(entity)),
        };
    }
    Ok(Json(matches))
}

fn field_matches(record: &Record, config: SearchConfig, term: &str) -> bool {
    let Some(value) = record.get(config.field).and_then(Value::as_str) else {
        return false;
    };
    match config.mode {
        MatchMode::Substring => contains_folded(value, term),
        MatchMode::Exact => value == term,
    }
}
