use crate::server::state::CatalogStore;
use anyhow::Context;
use log::info;
use std::{net::SocketAddr, thread};
use tokio::runtime::Builder;
use warp::{Filter, Rejection, Reply};

/// `GET /products.json`: the full catalog, no paging.
pub fn catalog_routes(
    store: CatalogStore,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let store_filter = warp::any().map(move || store.clone());

    warp::path("products.json")
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter)
        .map(|store: CatalogStore| warp::reply::json(&store.snapshot()))
}

/// HTTP endpoint hosting the static catalog on a background thread.
pub struct CatalogServer {
    store: CatalogStore,
    address: SocketAddr,
}

impl CatalogServer {
    /// Binds `address` before returning; only the accept loop runs on the
    /// background thread.
    pub fn spawn(store: CatalogStore, address: SocketAddr) -> anyhow::Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("building catalog server runtime")?;
        let routes = catalog_routes(store.clone());

        let (bound, server) = {
            let _guard = runtime.enter();
            warp::serve(routes)
                .try_bind_ephemeral(address)
                .with_context(|| format!("binding catalog server to {}", address))?
        };

        thread::Builder::new()
            .name("catalog-http".into())
            .spawn(move || runtime.block_on(server))
            .context("spawning catalog server thread")?;
        info!("serving catalog at http://{}/products.json", bound);

        Ok(Self {
            store,
            address: bound,
        })
    }

    /// Address actually bound, with any ephemeral port resolved.
    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }
}
