use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub port: u16,
    /// Existing catalog file; when absent the generator builds one.
    pub catalog: Option<PathBuf>,
    /// Where offline runs write the catalog.
    pub output: PathBuf,
    pub generator: GeneratorConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: 9000,
            catalog: None,
            output: PathBuf::from("products.json"),
            generator: GeneratorConfig::default(),
        }
    }
}

impl HostConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading host config {}", path_ref.display()))?;
        let config: HostConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing host config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_bind_local_port_9000() {
        let cfg = HostConfig::default();
        assert_eq!(cfg.bind_address().to_string(), "127.0.0.1:9000");
        assert!(cfg.catalog.is_none());
    }

    #[test]
    fn config_load_reads_yaml_with_partial_generator() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"port: 9100\ngenerator:\n  count: 25\n  seed: 4\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = HostConfig::load(&path).unwrap();
        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.generator.count, 25);
        assert_eq!(cfg.generator.max_price, GeneratorConfig::default().max_price);
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = HostConfig::load("/no/such/host.yaml").unwrap_err();
        assert!(err.to_string().contains("reading host config"));
    }
}
