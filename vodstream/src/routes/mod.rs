use axum::{
    Router,
    routing::{get, post},
};

use crate::AppStateRef;

mod catalog;
mod play;
mod refresh;

pub fn get_routes(app_state: &AppStateRef) -> Router {
    Router::new()
        .route("/groups", get(catalog::get_groups))
        .route("/entries", get(catalog::get_entries))
        .route("/entries/{id}", get(catalog::get_entry))
        .route("/entries/{id}/play", get(play::get_playback))
        .route("/entries/{id}/sources", get(play::get_playbacks))
        .route("/refresh", post(refresh::post_refresh))
        .with_state(app_state.clone())
}
