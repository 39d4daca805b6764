use log::warn;
use std::sync::{Arc, RwLock};
use storecore::ProductRecord;

/// Shared catalog served to every reader.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<Vec<ProductRecord>>>,
}

impl CatalogStore {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(products)),
        }
    }

    pub fn snapshot(&self) -> Vec<ProductRecord> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                warn!("catalog lock poisoned; serving last written catalog");
                poisoned.into_inner().clone()
            }
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}
