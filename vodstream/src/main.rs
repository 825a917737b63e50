use std::{env, sync::Arc};

use anyhow::Result;
use axum::Router;
use log::{error, info};
use tokio::net::TcpListener;
use vodstream_rs::{AppState, AppStateRef, load_config, routes};

fn build_app(app_state: &AppStateRef) -> Router {
    Router::new().merge(routes::get_routes(app_state))
}

async fn app_entry() -> Result<()> {
    let config = load_config(env::var("VS_CONFIG_PATH").unwrap_or_else(|_| "config.yml".into()))?;
    let app_state = Arc::new(AppState::new(config)?);

    // serve an empty catalog rather than refusing to start
    if let Err(e) = app_state.refresh().await {
        error!("Failed to load playlist {}: {}", app_state.source, e);
    }
    app_state.spawn_refresh_worker();

    let tcp_listener = TcpListener::bind(&app_state.config.listen_addr).await?;
    info!("Listening on {}", app_state.config.listen_addr);
    axum::serve(tcp_listener, build_app(&app_state)).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = app_entry().await {
        panic!("Fatal error: {}", e);
    }
}
