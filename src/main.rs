use std::sync::Arc;

use anyhow::Context;
use launch_dash::config::Config;
use launch_dash::data::loader;
use launch_dash::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env().context("reading configuration")?;

    let dataset = loader::load_file(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let bounds = dataset.payload_bounds();
    log::info!(
        "loaded {} launches from {} sites, payload {}..{} kg",
        dataset.len(),
        dataset.sites().len(),
        bounds.min,
        bounds.max
    );

    web::serve(config.bind_addr, Arc::new(dataset))
        .await
        .with_context(|| format!("serving on {}", config.bind_addr))
}
