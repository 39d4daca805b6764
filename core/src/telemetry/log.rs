use crate::prelude::StoreError;
use log::{debug, error, info};

/// Thin wrapper over the `log` facade used by the browsing controllers.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn new() -> Self {
        Self { target: "storecore" }
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    pub fn trace(&self, message: &str) {
        debug!(target: self.target, "{}", message);
    }

    /// Logs and swallows an error; nothing is surfaced to the user.
    pub fn report(&self, err: &StoreError) {
        match err {
            StoreError::Fetch(_) => {
                error!(target: self.target, "Error fetching the products: {}", err)
            }
            StoreError::Runtime(_) => error!(target: self.target, "Error: {}", err),
        }
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
