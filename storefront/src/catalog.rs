use std::path::PathBuf;
use storecore::catalog::parse_catalog;
use storecore::ProductRecord;

pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:9000/products.json";

/// Category triggers offered before any catalog read has succeeded.
pub const DEFAULT_CATEGORIES: &[&str] = &["Electronics", "Home", "Outdoors", "Stationery"];

/// Where the storefront reads its catalog from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Url(String),
    File(PathBuf),
}

impl CatalogLocation {
    pub fn describe(&self) -> String {
        match self {
            CatalogLocation::Url(url) => url.clone(),
            CatalogLocation::File(path) => path.display().to_string(),
        }
    }
}

/// One full read of the catalog. Errors come back as text so they can ride
/// inside a GUI message.
pub async fn fetch_catalog(location: CatalogLocation) -> Result<Vec<ProductRecord>, String> {
    match location {
        CatalogLocation::Url(url) => {
            let response = reqwest::get(&url)
                .await
                .and_then(|response| response.error_for_status())
                .map_err(|e| e.to_string())?;
            let bytes = response.bytes().await.map_err(|e| e.to_string())?;
            parse_catalog(&bytes).map_err(|e| e.to_string())
        }
        CatalogLocation::File(path) => {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| format!("{}: {}", path.display(), e))?;
            parse_catalog(&bytes).map_err(|e| e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::SocketAddr;
    use tempfile::NamedTempFile;
    use warp::Filter;

    /// Serves `body` at `/products.json` on an ephemeral local port.
    fn serve_catalog(body: &'static str) -> String {
        let route = warp::path("products.json")
            .map(move || warp::reply::with_header(body, "content-type", "application/json"));
        let (bound, server) = warp::serve(route)
            .try_bind_ephemeral(SocketAddr::from(([127, 0, 0, 1], 0)))
            .unwrap();
        tokio::spawn(server);
        format!("http://{}/products.json", bound)
    }

    #[tokio::test]
    async fn url_location_reads_catalog_through_core_parser() {
        let url = serve_catalog(
            r#"[{"name":"Lamp","price":20,"category":"Home"},{"price":5,"category":"Home"},{"name":"Broken"}]"#,
        );
        let products = fetch_catalog(CatalogLocation::Url(url)).await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Lamp");
        assert_eq!(products[1].name, "");
    }

    #[tokio::test]
    async fn url_location_reports_missing_route() {
        let url = serve_catalog("[]").replace("products.json", "missing.json");
        let err = fetch_catalog(CatalogLocation::Url(url)).await.unwrap_err();
        assert!(err.contains("404"));
    }

    #[tokio::test]
    async fn file_location_reads_catalog() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(br#"[{"name": "Lamp", "price": 20, "category": "Home"}]"#)
            .unwrap();
        let path = temp.into_temp_path();
        let products = fetch_catalog(CatalogLocation::File(path.to_path_buf()))
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category.as_deref(), Some("Home"));
    }

    #[tokio::test]
    async fn unreadable_file_reports_error_text() {
        let err = fetch_catalog(CatalogLocation::File("/no/such/products.json".into()))
            .await
            .unwrap_err();
        assert!(err.contains("/no/such/products.json"));
    }

    #[tokio::test]
    async fn malformed_file_reports_parse_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"[{]").unwrap();
        let path = temp.into_temp_path();
        let err = fetch_catalog(CatalogLocation::File(path.to_path_buf()))
            .await
            .unwrap_err();
        assert!(err.starts_with("fetch failure"));
    }
}
