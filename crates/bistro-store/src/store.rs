use std::sync::Arc;

use async_trait::async_trait;
use bistro_types::Menu;

use crate::config::{StoreBackend, StoreConfig};
use crate::error::Result;
use crate::file::JsonFileStore;
use crate::memory::MemoryStore;

/// Whole-document menu storage.
///
/// `load` returns `None` when nothing has been persisted yet. `save`
/// replaces the stored document entirely.
#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn load(&self) -> Result<Option<Menu>>;

    async fn save(&self, menu: &Menu) -> Result<()>;

    /// Short description for logs
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: MenuStore + ?Sized> MenuStore for Arc<T> {
    async fn load(&self) -> Result<Option<Menu>> {
        (**self).load().await
    }

    async fn save(&self, menu: &Menu) -> Result<()> {
        (**self).save(menu).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Build the menu store selected by the configuration
pub fn open_menu_store(config: &StoreConfig) -> Arc<dyn MenuStore> {
    match config.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File => Arc::new(JsonFileStore::new(&config.menu_path)),
    }
}
