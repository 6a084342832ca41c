use std::sync::Arc;

use anyhow::Result;
use bistro_menu::MenuService;
use bistro_store::{open_menu_store, MenuStore, UploadDir};
use serde::Deserialize;

use crate::config::ServerConfig;
use crate::templates::PageRenderer;

/// Menu service over whichever backend the configuration selects
pub type SharedMenuService = MenuService<Arc<dyn MenuStore>>;

/// API state shared by all handlers
#[derive(Clone)]
pub struct ApiState {
    pub menu: Arc<SharedMenuService>,
    pub uploads: Arc<UploadDir>,
    pub pages: Arc<PageRenderer>,
    pub config: Arc<ServerConfig>,
}

impl ApiState {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let store = open_menu_store(&config.store);
        Self::with_store(config, store)
    }

    /// State over an already opened store
    pub fn with_store(config: ServerConfig, store: Arc<dyn MenuStore>) -> Result<Self> {
        Ok(Self {
            menu: Arc::new(MenuService::new(store)),
            uploads: Arc::new(UploadDir::from_config(&config.store)),
            pages: Arc::new(PageRenderer::new()?),
            config: Arc::new(config),
        })
    }
}

/// Query string of the menu browser page
#[derive(Debug, Default, Deserialize)]
pub struct MenuPageQuery {
    pub category: Option<usize>,
    pub path: Option<String>,
    pub item: Option<String>,
}
