use anyhow::Context;
use clap::Parser;
use config::HostConfig;
use log::info;
use server::{CatalogServer, CatalogStore};
use source::{resolve_catalog, write_catalog};
use std::path::PathBuf;
use storecore::catalog::distinct_categories;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod config;
mod generator;
mod server;
mod source;

#[derive(Parser)]
#[command(author, version, about = "Static product catalog host")]
struct Args {
    /// Load host settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Serve this catalog file instead of generating one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Number of products to generate
    #[arg(long)]
    generate: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    port: Option<u16>,
    /// Write the catalog to disk and print a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Output path for offline runs
    #[arg(long)]
    output: Option<PathBuf>,
    /// Keep the HTTP endpoint alive until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(HostConfig, bool, bool)> {
        let mut config = match &self.config {
            Some(path) => HostConfig::load(path)?,
            None => HostConfig::default(),
        };
        if let Some(path) = self.catalog {
            config.catalog = Some(path);
        }
        if let Some(count) = self.generate {
            config.generator.count = count;
        }
        if let Some(seed) = self.seed {
            config.generator.seed = seed;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        Ok((config, self.offline, self.serve))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let (config, offline, serve) = Args::parse().into_config()?;

    let products = resolve_catalog(&config)?;

    if offline {
        write_catalog(&config.output, &products)?;
        let categories = distinct_categories(&products);
        let uncategorized = products.iter().filter(|p| p.category.is_none()).count();
        println!(
            "Offline run -> {} products, {} categories {:?}, {} uncategorized, written to {}",
            products.len(),
            categories.len(),
            categories,
            uncategorized,
            config.output.display()
        );
    }

    if serve {
        let server = CatalogServer::spawn(CatalogStore::new(products), config.bind_address())?;
        info!(
            "catalog host running on {} with {} products (Ctrl+C to stop)",
            server.address(),
            server.store().len()
        );
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
