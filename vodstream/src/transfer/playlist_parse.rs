use tokio::task::JoinError;
use vodlist_rs::{Catalog, parse};

/// Parse and index playlist text off the async runtime
pub async fn build_catalog_async(text: String) -> Result<Catalog, JoinError> {
    tokio::task::spawn_blocking(move || Catalog::build(parse(text))).await
}
