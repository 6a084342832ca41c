use bistro_store::MenuStore;
use bistro_types::{seed_menu, ItemPath, Menu, MenuItem};
use tracing::{debug, info, warn};

use crate::error::ServiceResult;
use crate::price::normalize_item_price;
use crate::tree;

/// Menu editing backed by whole-document persistence.
///
/// Every edit computes the new tree from the caller's copy, writes the full
/// document to the store and only then hands the new tree back. On a failed
/// write the caller keeps its previous copy. There is no conflict detection:
/// two editors working from stale copies overwrite each other.
pub struct MenuService<S> {
    store: S,
}

impl<S: MenuStore> MenuService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current document for display. Never fails: a missing or unreadable
    /// document yields the seed menu.
    pub async fn load(&self) -> Menu {
        match self.store.load().await {
            Ok(Some(menu)) => menu,
            Ok(None) => {
                debug!("No stored menu in {}, using seed data", self.store.describe());
                seed_menu()
            }
            Err(e) if e.is_corrupt_document() => {
                warn!("Stored menu is corrupt, serving seed data: {}", e);
                seed_menu()
            }
            Err(e) => {
                warn!("Failed to load menu from {}: {}", self.store.describe(), e);
                seed_menu()
            }
        }
    }

    /// Current document for editing. Read errors are returned so an edit
    /// never starts from seed data by accident.
    pub async fn fetch(&self) -> ServiceResult<Menu> {
        Ok(self.store.load().await?.unwrap_or_else(seed_menu))
    }

    /// Overwrite the stored document
    pub async fn save(&self, menu: &Menu) -> ServiceResult<()> {
        self.store.save(menu).await?;
        Ok(())
    }

    pub async fn add_category(&self, menu: &Menu, name: &str) -> ServiceResult<Menu> {
        let updated = tree::add_category(menu, name)?;
        info!("Adding category '{}'", name.trim());
        self.commit(updated).await
    }

    pub async fn delete_category(&self, menu: &Menu, name: &str) -> ServiceResult<Menu> {
        let updated = tree::delete_category(menu, name)?;
        info!("Deleting category '{}'", name);
        self.commit(updated).await
    }

    pub async fn add_item(
        &self,
        menu: &Menu,
        category: &str,
        item: MenuItem,
        parent: &ItemPath,
    ) -> ServiceResult<Menu> {
        let mut item = item;
        normalize_item_price(&mut item);
        let name = item.name.clone();

        let updated = tree::add_item(menu, category, item, parent)?;
        info!("Adding '{}' to {}/{}", name, category, parent);
        self.commit(updated).await
    }

    pub async fn delete_item(
        &self,
        menu: &Menu,
        category: &str,
        path: &ItemPath,
    ) -> ServiceResult<Menu> {
        let updated = tree::delete_item(menu, category, path)?;
        info!("Deleting {}/{}", category, path);
        self.commit(updated).await
    }

    pub async fn update_item(
        &self,
        menu: &Menu,
        category: &str,
        updated_item: MenuItem,
        path: &ItemPath,
    ) -> ServiceResult<Menu> {
        let mut updated_item = updated_item;
        normalize_item_price(&mut updated_item);

        let updated = tree::update_item(menu, category, updated_item, path)?;
        info!("Updating {}/{}", category, path);
        self.commit(updated).await
    }

    pub async fn update_item_with_move(
        &self,
        menu: &Menu,
        from_category: &str,
        from_path: &ItemPath,
        to_category: &str,
        to_parent: &ItemPath,
        updated_item: MenuItem,
    ) -> ServiceResult<Menu> {
        let mut updated_item = updated_item;
        normalize_item_price(&mut updated_item);

        let updated = tree::update_item_with_move(
            menu,
            from_category,
            from_path,
            to_category,
            to_parent,
            updated_item,
        )?;
        info!(
            "Moving {}/{} to {}/{}",
            from_category, from_path, to_category, to_parent
        );
        self.commit(updated).await
    }

    async fn commit(&self, menu: Menu) -> ServiceResult<Menu> {
        self.store.save(&menu).await?;
        Ok(menu)
    }
}
