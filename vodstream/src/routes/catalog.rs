use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use vodlist_rs::{Entry, GroupFilter};

use crate::AppStateRef;

#[derive(Deserialize)]
pub struct EntriesQuery {
    pub group: Option<String>,
    pub search: Option<String>,
}

#[derive(Serialize)]
pub struct EntriesResponse {
    pub total: usize,
    pub entries: Vec<Entry>,
}

pub async fn get_groups(State(state): State<AppStateRef>) -> Json<Vec<SmolStr>> {
    Json(state.catalog().await.groups().to_vec())
}

pub async fn get_entries(
    State(state): State<AppStateRef>,
    Query(query): Query<EntriesQuery>,
) -> Json<EntriesResponse> {
    let group = query.group.map(GroupFilter::from).unwrap_or_default();
    let entries = state
        .catalog()
        .await
        .filter(group, query.search.unwrap_or_default());

    Json(EntriesResponse {
        total: entries.len(),
        entries,
    })
}

pub async fn get_entry(
    State(state): State<AppStateRef>,
    Path(id): Path<usize>,
) -> Result<Json<Entry>, StatusCode> {
    state
        .catalog()
        .await
        .entry(id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
