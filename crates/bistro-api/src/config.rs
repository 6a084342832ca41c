//! Server configuration from the process environment

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use bistro_store::{StoreBackend, StoreConfig, DEFAULT_UPLOADS_URL_PREFIX};
use tracing::{debug, warn};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MENU_PATH: &str = "data/menu.json";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub store: StoreConfig,
    pub public_dir: PathBuf,
    pub upload_max_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let public_dir = PathBuf::from(DEFAULT_PUBLIC_DIR);
        Self {
            port: DEFAULT_PORT,
            store: StoreConfig::file(DEFAULT_MENU_PATH).with_uploads_dir(public_dir.join("uploads")),
            public_dir,
            upload_max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `MENU_STORE`, `MENU_PATH`, `PUBLIC_DIR`, `UPLOADS_DIR` and
    /// `UPLOAD_MAX_BYTES`. Missing or invalid values fall back to defaults.
    pub fn from_env() -> Self {
        let port = try_load("PORT", DEFAULT_PORT);
        let backend = try_load("MENU_STORE", StoreBackend::File);
        let menu_path = var("MENU_PATH").unwrap_or_else(|| DEFAULT_MENU_PATH.to_string());
        let public_dir = PathBuf::from(
            var("PUBLIC_DIR").unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string()),
        );
        let uploads_dir = var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| public_dir.join("uploads"));
        let upload_max_bytes = try_load("UPLOAD_MAX_BYTES", DEFAULT_UPLOAD_MAX_BYTES);

        Self {
            port,
            store: StoreConfig::file(menu_path)
                .with_backend(backend)
                .with_uploads_dir(uploads_dir)
                .with_uploads_url_prefix(DEFAULT_UPLOADS_URL_PREFIX),
            public_dir,
            upload_max_bytes,
        }
    }

    /// Configuration for an in-process server, used by tests
    pub fn in_memory<P: Into<PathBuf>>(public_dir: P) -> Self {
        let public_dir = public_dir.into();
        Self {
            store: StoreConfig::memory().with_uploads_dir(public_dir.join("uploads")),
            public_dir,
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    pub fn with_upload_max_bytes(mut self, bytes: usize) -> Self {
        self.upload_max_bytes = bytes;
        self
    }

    pub fn address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }),
        None => {
            debug!("{key} not set, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: &[&str] = &[
        "PORT",
        "MENU_STORE",
        "MENU_PATH",
        "PUBLIC_DIR",
        "UPLOADS_DIR",
        "UPLOAD_MAX_BYTES",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = ServerConfig::from_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.store.menu_path, PathBuf::from("data/menu.json"));
        assert_eq!(config.store.uploads_dir, PathBuf::from("public/uploads"));
        assert_eq!(config.upload_max_bytes, 10_485_760);
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("PORT", "8080");
        env::set_var("MENU_STORE", "memory");
        env::set_var("PUBLIC_DIR", "/srv/www");
        env::set_var("UPLOAD_MAX_BYTES", "1024");

        let config = ServerConfig::from_env();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.uploads_dir, PathBuf::from("/srv/www/uploads"));
        assert_eq!(config.upload_max_bytes, 1024);
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("MENU_STORE", "postgres");
        env::set_var("UPLOADS_DIR", "/tmp/uploads");

        let config = ServerConfig::from_env();
        clear_env();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.store.uploads_dir, PathBuf::from("/tmp/uploads"));
    }
}
