use std::{sync::Arc, time::Duration};

use log::{info, warn};
use reqwest::{Client, Proxy};
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::sleep,
};
use vodlist_rs::{Catalog, PlayerBridge};

use crate::{
    Config,
    transfer::{FetchError, PlaylistSource, build_catalog_async},
};

pub type AppStateRef = Arc<AppState>;
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
    pub bridge: PlayerBridge,
    pub source: PlaylistSource,
    catalog: RwLock<Arc<Catalog>>,
    refresh_lock: Mutex<()>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();

        if let Some(user_agent) = &config.http.user_agent {
            builder = builder.user_agent(user_agent)
        }

        if let Some(proxy) = &config.http.proxy {
            info!("With proxy: {}", proxy);
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(Self {
            http_client: builder.build()?,
            bridge: config.player_bridge(),
            source: PlaylistSource::from_location(&config.playlist),
            catalog: RwLock::new(Arc::new(Catalog::default())),
            refresh_lock: Mutex::new(()),
            config: Arc::new(config),
        })
    }

    /// Snapshot of the current catalog, unaffected by later refreshes
    pub async fn catalog(&self) -> Arc<Catalog> {
        self.catalog.read().await.clone()
    }

    pub async fn replace_catalog(&self, catalog: Catalog) {
        *self.catalog.write().await = Arc::new(catalog);
    }

    /// Fetch and parse the playlist again. The old catalog stays in place on failure.
    ///
    /// Refreshes run one at a time, so a slow fetch never overwrites a newer one.
    pub async fn refresh(&self) -> Result<usize, FetchError> {
        let _guard = self.refresh_lock.lock().await;

        let text = self.source.fetch_text(&self.http_client).await?;
        let catalog = build_catalog_async(text).await?;
        let count = catalog.len();

        self.replace_catalog(catalog).await;
        info!("Loaded {} entries from {}", count, self.source);
        Ok(count)
    }

    /// Refresh every `refreshInterval` seconds, if configured
    pub fn spawn_refresh_worker(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let interval = match self.config.refresh_interval {
            None | Some(0) => return None,
            Some(secs) => Duration::from_secs(secs),
        };

        let worker_self_ref = self.clone();
        Some(tokio::spawn(async move {
            loop {
                sleep(interval).await;
                if let Err(e) = worker_self_ref.refresh().await {
                    warn!("Error while refreshing {}: {}", worker_self_ref.source, e);
                }
            }
        }))
    }
}
