use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow::anyhow!(
                "Invalid STORAGE_BACKEND '{}'. Must be 'file' or 'memory'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    pub unique_business_names: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("REGISTRY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("REGISTRY_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .parse()?;

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let unique_business_names = env::var("UNIQUE_BUSINESS_NAMES")
            .map(|v| parse_bool(&v))
            .unwrap_or(false);

        Ok(Config {
            host,
            port,
            storage_backend,
            data_dir,
            unique_business_names,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|e| anyhow::anyhow!("Invalid socket address: {}", e))
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
