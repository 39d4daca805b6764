use crate::catalog::record::ProductRecord;
use crate::prelude::StoreResult;
use log::warn;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parses a catalog document (a JSON array of product records).
///
/// Only a document that is not a JSON array fails the read. Entries that
/// cannot be read as a record are skipped with a warning.
pub fn parse_catalog(bytes: &[u8]) -> StoreResult<Vec<ProductRecord>> {
    let entries: Vec<Value> = serde_json::from_slice(bytes)?;
    let mut products = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<ProductRecord>(entry) {
            Ok(record) => products.push(record),
            Err(err) => warn!("skipping catalog entry {}: {}", position, err),
        }
    }
    Ok(products)
}

/// Reads and parses a catalog file from disk.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> StoreResult<Vec<ProductRecord>> {
    let bytes = fs::read(path.as_ref())?;
    parse_catalog(&bytes)
}

/// Category labels in the order they first appear in the catalog.
pub fn distinct_categories(catalog: &[ProductRecord]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in catalog.iter().filter_map(|record| record.category.as_deref()) {
        if !labels.iter().any(|seen| seen == label) {
            labels.push(label.to_string());
        }
    }
    labels
}
