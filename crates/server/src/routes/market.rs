use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::market;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::HttpError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatedAd {
    pub status: &'static str,
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner: String,
}

impl From<market::Model> for CreatedAd {
    fn from(m: market::Model) -> Self {
        Self { status: "ok", id: m.id, title: m.title, description: m.description, owner: m.owner }
    }
}

/// Read view of an ad. Carries no `id`, unlike [`CreatedAd`].
#[derive(Debug, Serialize)]
pub struct AdView {
    pub title: String,
    pub creation_time: String,
    pub description: String,
    pub owner: String,
}

impl From<market::Model> for AdView {
    fn from(m: market::Model) -> Self {
        Self {
            title: m.title,
            creation_time: m.creation_time.to_rfc3339(),
            description: m.description,
            owner: m.owner,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub status: &'static str,
}

/// Path ids that cannot name a stored row are reported like missing rows.
pub fn parse_id(raw: &str) -> Result<i32, HttpError> {
    raw.parse::<i32>().map_err(|_| HttpError::not_found())
}

#[utoipa::path(
    post,
    path = "/market/",
    tag = "market",
    request_body = crate::openapi::CreateAdRequest,
    responses(
        (status = 200, description = "Ad created", body = crate::openapi::CreatedAdDoc),
        (status = 400, description = "Validation failed or store rejected the ad", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedAd>, HttpError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "unreadable request body");
        HttpError::malformed()
    })?;
    let created = state.market.create(&payload).await?;
    Ok(Json(created.into()))
}

#[utoipa::path(
    get,
    path = "/market/{id}/",
    tag = "market",
    params(("id" = i32, Path, description = "Ad id")),
    responses(
        (status = 200, description = "Ad found", body = crate::openapi::AdViewDoc),
        (status = 404, description = "No ad with this id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<AdView>, HttpError> {
    let id = parse_id(&id)?;
    let ad = state.market.get(id).await?;
    Ok(Json(ad.into()))
}

#[utoipa::path(
    delete,
    path = "/market/{id}/",
    tag = "market",
    params(("id" = i32, Path, description = "Ad id")),
    responses(
        (status = 200, description = "Ad deleted", body = crate::openapi::DeletedDoc),
        (status = 404, description = "No ad with this id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Deleted>, HttpError> {
    let id = parse_id(&id)?;
    state.market.delete(id).await?;
    Ok(Json(Deleted { status: "success" }))
}
