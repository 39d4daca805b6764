use crate::config::HostConfig;
use crate::generator::profile::build_catalog_from_config;
use anyhow::Context;
use log::info;
use std::fs;
use std::path::Path;
use storecore::catalog::{distinct_categories, load_catalog};
use storecore::ProductRecord;

/// Loads the configured catalog file, or generates one when none is set.
pub fn resolve_catalog(config: &HostConfig) -> anyhow::Result<Vec<ProductRecord>> {
    let products = match &config.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => build_catalog_from_config(&config.generator).context("generating catalog")?,
    };
    info!(
        "catalog ready: {} products in {} categories",
        products.len(),
        distinct_categories(&products).len()
    );
    Ok(products)
}

pub fn write_catalog<P: AsRef<Path>>(path: P, products: &[ProductRecord]) -> anyhow::Result<()> {
    let path_ref = path.as_ref();
    if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let body = serde_json::to_string_pretty(products).context("serializing catalog")?;
    fs::write(path_ref, body).with_context(|| format!("writing catalog {}", path_ref.display()))?;
    Ok(())
}
