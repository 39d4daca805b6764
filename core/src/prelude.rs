/// Error kinds surfaced by the browsing core.
///
/// Both kinds are logged and swallowed by the controller; nothing here is
/// propagated to a user-facing error view.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Network or parse failure while reading the catalog.
    #[error("fetch failure: {0}")]
    Fetch(String),
    /// Any other error surfaced to the application loop.
    #[error("runtime error: {0}")]
    Runtime(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Fetch(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Fetch(err.to_string())
    }
}
