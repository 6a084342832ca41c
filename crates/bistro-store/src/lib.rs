//! # Bistro Store
//!
//! Persistence for the menu document and uploaded images.
//!
//! The menu is stored as one JSON document and always written whole: every
//! save overwrites the previous content, there is no locking or versioning,
//! and concurrent writers race with the last write winning.
//!
//! ## Backends
//!
//! - **Memory**: process-local, lost on restart
//! - **File**: a JSON file, either under the public web root or a data directory
//!
//! ```rust,no_run
//! use bistro_store::{open_menu_store, StoreConfig};
//!
//! # async fn run() -> bistro_store::Result<()> {
//! let store = open_menu_store(&StoreConfig::file("data/menu.json"));
//! let menu = store.load().await?.unwrap_or_else(bistro_types::seed_menu);
//! store.save(&menu).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;
pub mod uploads;

pub use config::{StoreBackend, StoreConfig, DEFAULT_UPLOADS_URL_PREFIX};
pub use error::{Result, StoreError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{open_menu_store, MenuStore};
pub use uploads::{random_file_name, StoredUpload, UploadDir};
