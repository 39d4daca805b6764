pub mod routes;
pub mod state;

pub use routes::CatalogServer;
pub use state::CatalogStore;
