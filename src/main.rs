use crate::config::cli::Command;
use crate::config::Config;
use crate::domain::storage::Storage;
use crate::domain::CollectionDate;
use crate::error::Result;
use crate::infrastructure::{HttpPageSource, JsonDocumentStore};
use crate::services::pipeline::MvpPipeline;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

mod api;
mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;
    init_tracing(&config.args.log_level);

    let store: Arc<dyn Storage> = Arc::new(JsonDocumentStore::new(config.args.data_dir.clone()));

    match config.args.command {
        Some(Command::Serve { port }) => {
            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            info!(%addr, "serving daily MVP rankings");
            warp::serve(api::routes(store)).run(addr).await;
        }
        None => {
            config.ensure_directories()?;
            let pages = HttpPageSource::new(config.http_client.clone());
            let pipeline = MvpPipeline::new(&config, pages, store)?;
            pipeline.run(CollectionDate::today()).await?;
            info!("Collection run completed successfully!");
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    let level = level.parse().unwrap_or(LevelFilter::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}
