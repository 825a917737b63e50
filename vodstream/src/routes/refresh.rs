use axum::{Json, extract::State};
use serde::Serialize;

use crate::{AppStateRef, transfer::FetchError};

#[derive(Serialize)]
pub struct RefreshResponse {
    pub total: usize,
}

pub async fn post_refresh(
    State(state): State<AppStateRef>,
) -> Result<Json<RefreshResponse>, FetchError> {
    let total = state.refresh().await?;
    Ok(Json(RefreshResponse { total }))
}
