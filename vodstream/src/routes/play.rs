use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use vodlist_rs::Playback;

use crate::AppStateRef;

#[derive(Deserialize)]
pub struct PlayQuery {
    /// Index into the entry's sources, the primary source when absent
    pub source: Option<usize>,
}

pub async fn get_playback(
    State(state): State<AppStateRef>,
    Path(id): Path<usize>,
    Query(query): Query<PlayQuery>,
) -> Result<Json<Playback>, StatusCode> {
    let catalog = state.catalog().await;
    let entry = catalog.entry(id).ok_or(StatusCode::NOT_FOUND)?;

    entry
        .playback(query.source.unwrap_or(0), &state.bridge)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn get_playbacks(
    State(state): State<AppStateRef>,
    Path(id): Path<usize>,
) -> Result<Json<Vec<Playback>>, StatusCode> {
    let catalog = state.catalog().await;
    let entry = catalog.entry(id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(entry.playbacks(&state.bridge)))
}
