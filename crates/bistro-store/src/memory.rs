use async_trait::async_trait;
use bistro_types::Menu;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::store::MenuStore;

/// Process-local menu document. Content is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<Option<Menu>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a document
    pub fn with_menu(menu: Menu) -> Self {
        Self {
            document: RwLock::new(Some(menu)),
        }
    }
}

#[async_trait]
impl MenuStore for MemoryStore {
    async fn load(&self) -> Result<Option<Menu>> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, menu: &Menu) -> Result<()> {
        debug!("Replacing in-memory menu ({} categories)", menu.len());
        *self.document.write().await = Some(menu.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory document".to_string()
    }
}
