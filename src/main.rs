use stayscore::config::Config;
use stayscore::error::Result;
use stayscore::infrastructure::{FileSystemStore, HttpRatingProvider};
use stayscore::services::refresh::RefreshService;
use stayscore::services::report_service::ReportService;
use std::sync::Arc;
use tokio::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    let level = config
        .args
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    config.ensure_directories()?;

    let store = Arc::new(FileSystemStore::new(config.args.data_dir.clone()));
    let provider = Arc::new(HttpRatingProvider::new(
        config.http_client.clone(),
        config.portfolio.provider_url.clone(),
        config.args.provider_api_key.clone(),
    ));
    let refresh = RefreshService::new(
        provider,
        store.clone(),
        Duration::from_millis(config.args.delay_ms),
    );

    ReportService::new(config, store, refresh).run().await
}
