//! Admin commands. Every mutation fetches the whole document, applies one
//! tree operation and writes the whole document back.

use anyhow::{Context, Result};
use bistro_menu::{render_menu, tree, ExpandState, MenuService};
use bistro_types::{ItemPath, Menu, MenuItem};
use tracing::{info, warn};

use crate::cli::{parse_expand_target, Commands, ItemFields};
use crate::remote::RemoteMenuStore;

pub type AdminService = MenuService<RemoteMenuStore>;

/// Run one command and return what should be printed.
///
/// `confirm` is asked before anything is deleted unless `--yes` was given.
pub async fn execute<F>(service: &AdminService, command: Commands, mut confirm: F) -> Result<String>
where
    F: FnMut(&str) -> Result<bool>,
{
    match command {
        Commands::Show { expand, all } => {
            let menu = service.fetch().await?;
            let mut state = if all {
                ExpandState::all()
            } else {
                ExpandState::new()
            };
            for raw in &expand {
                match parse_expand_target(raw) {
                    Some((category, path)) => state.expand(&category, &path),
                    None => warn!("Ignoring expand target '{}', expected CATEGORY:PATH", raw),
                }
            }
            Ok(render_menu(&menu, &state)?)
        }

        Commands::AddCategory { name } => {
            let menu = service.fetch().await?;
            service.add_category(&menu, &name).await?;
            Ok(format!("Added category '{}'", name.trim()))
        }

        Commands::DeleteCategory { name, yes } => {
            let menu = service.fetch().await?;
            let category = menu
                .category(&name)
                .with_context(|| format!("Category '{name}' not found"))?;
            let prompt = format!(
                "Delete category '{}' with {} items?",
                name,
                category.items.len()
            );
            if !yes && !confirm(&prompt)? {
                return Ok("Cancelled".to_string());
            }
            service.delete_category(&menu, &name).await?;
            Ok(format!("Deleted category '{name}'"))
        }

        Commands::AddItem {
            category,
            parent,
            name,
            fields,
        } => {
            let menu = service.fetch().await?;
            let item = fields.to_dish(&name, None);
            tree::add_item(&menu, &category, item.clone(), &parent)?;
            let item = with_uploaded_image(service, &fields, item).await?;
            service.add_item(&menu, &category, item, &parent).await?;
            Ok(format!("Added '{}' to {}", name, location(&category, &parent)))
        }

        Commands::AddSubcategory {
            category,
            parent,
            name,
            description,
        } => {
            let menu = service.fetch().await?;
            let item = MenuItem::subcategory(name.clone(), description);
            service.add_item(&menu, &category, item, &parent).await?;
            Ok(format!(
                "Added subcategory '{}' to {}",
                name,
                location(&category, &parent)
            ))
        }

        Commands::DeleteItem {
            category,
            path,
            yes,
        } => {
            let menu = service.fetch().await?;
            let item = tree::find_item(&menu, &category, &path)?;
            let prompt = if item.is_container() {
                format!(
                    "Delete subcategory '{}' with {} items?",
                    item.name,
                    item.children().len()
                )
            } else {
                format!("Delete '{}'?", item.name)
            };
            if !yes && !confirm(&prompt)? {
                return Ok("Cancelled".to_string());
            }
            service.delete_item(&menu, &category, &path).await?;
            Ok(format!("Deleted {}", location(&category, &path)))
        }

        Commands::UpdateItem {
            category,
            path,
            name,
            fields,
        } => {
            let menu = service.fetch().await?;
            let item = edited_item(&menu, &category, &path, name, &fields)?;
            tree::update_item(&menu, &category, item.clone(), &path)?;
            let item = with_uploaded_image(service, &fields, item).await?;
            service.update_item(&menu, &category, item, &path).await?;
            Ok(format!("Updated {}", location(&category, &path)))
        }

        Commands::MoveItem {
            category,
            path,
            to_category,
            to_parent,
            name,
            fields,
        } => {
            let menu = service.fetch().await?;
            let item = edited_item(&menu, &category, &path, name, &fields)?;
            tree::update_item_with_move(
                &menu,
                &category,
                &path,
                &to_category,
                &to_parent,
                item.clone(),
            )?;
            let item = with_uploaded_image(service, &fields, item).await?;
            let moved_name = item.name.clone();
            service
                .update_item_with_move(&menu, &category, &path, &to_category, &to_parent, item)
                .await?;
            Ok(format!(
                "Moved {} to {}",
                location(&category, &path),
                location(&to_category, &to_parent.child(moved_name))
            ))
        }

        Commands::Upload { file } => {
            let url = service
                .store()
                .upload_image(&file)
                .await
                .with_context(|| format!("Failed to upload {}", file.display()))?;
            info!("Uploaded {}", file.display());
            Ok(url)
        }
    }
}

/// Current item at `path` with the requested changes applied, apart from
/// an `--image-file` upload
fn edited_item(
    menu: &Menu,
    category: &str,
    path: &ItemPath,
    name: Option<String>,
    fields: &ItemFields,
) -> Result<MenuItem> {
    let mut item = tree::find_item(menu, category, path)?.clone();
    if let Some(name) = name {
        item.name = name;
    }
    fields.apply(&mut item, None);
    Ok(item)
}

/// Upload `--image-file` and point the item at it. Called only once the
/// tree operation is known to succeed so a refused edit leaves no file behind.
async fn with_uploaded_image(
    service: &AdminService,
    fields: &ItemFields,
    item: MenuItem,
) -> Result<MenuItem> {
    let Some(file) = &fields.image_file else {
        return Ok(item);
    };
    let url = service
        .store()
        .upload_image(file)
        .await
        .with_context(|| format!("Failed to upload {}", file.display()))?;
    Ok(MenuItem {
        image: Some(url),
        ..item
    })
}

fn location(category: &str, path: &ItemPath) -> String {
    if path.is_root() {
        category.to_string()
    } else {
        format!("{category}/{path}")
    }
}
