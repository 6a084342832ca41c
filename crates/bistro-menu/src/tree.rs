//! Pure operations over the menu tree.
//!
//! Nodes are addressed by a category name plus an [`ItemPath`] of node names.
//! Every mutating function works on a copy and returns the new document, so
//! a refused edit leaves the caller's menu as it was.

use bistro_types::{ItemPath, Menu, MenuCategory, MenuItem, MAX_DEPTH, PATH_SEPARATOR};

use crate::error::{MenuError, Result};

/// Append an empty category
pub fn add_category(menu: &Menu, name: &str) -> Result<Menu> {
    let name = checked_name(name)?;
    if menu.category(&name).is_some() {
        return Err(MenuError::DuplicateCategory(name));
    }

    let mut updated = menu.clone();
    updated.0.push(MenuCategory::new(name));
    Ok(updated)
}

/// Remove a category with everything in it
pub fn delete_category(menu: &Menu, name: &str) -> Result<Menu> {
    if menu.category(name).is_none() {
        return Err(MenuError::CategoryNotFound(name.to_string()));
    }

    let mut updated = menu.clone();
    updated.0.retain(|category| category.category != name);
    Ok(updated)
}

/// Children listed at `parent` (the category top level for the root path)
pub fn items_at<'a>(menu: &'a Menu, category: &str, parent: &ItemPath) -> Result<&'a [MenuItem]> {
    let found = menu
        .category(category)
        .ok_or_else(|| MenuError::CategoryNotFound(category.to_string()))?;

    let mut level: &[MenuItem] = &found.items;
    for (index, segment) in parent.segments().iter().enumerate() {
        let node = level
            .iter()
            .find(|item| &item.name == segment)
            .ok_or_else(|| not_found(category, parent, index))?;
        if !node.is_container() {
            return Err(not_container(category, parent, index));
        }
        level = node.children();
    }
    Ok(level)
}

/// Node at `path`
pub fn find_item<'a>(menu: &'a Menu, category: &str, path: &ItemPath) -> Result<&'a MenuItem> {
    let (name, parent) = split(path)?;
    items_at(menu, category, &parent)?
        .iter()
        .find(|item| item.name == name)
        .ok_or_else(|| MenuError::ItemNotFound {
            category: category.to_string(),
            path: path.to_string(),
        })
}

/// Append `item` as the last child of the node at `parent`
pub fn add_item(menu: &Menu, category: &str, item: MenuItem, parent: &ItemPath) -> Result<Menu> {
    let mut item = item;
    item.name = checked_name(&item.name)?;
    check_child_names(&item)?;

    let depth = parent.len() + 1;
    check_depth(depth, &item)?;

    let mut updated = menu.clone();
    let level = level_mut(&mut updated, category, parent)?;
    ensure_unique(level, &item.name, None, category, parent)?;

    item.conform(depth);
    level.push(item);
    Ok(updated)
}

/// Remove exactly the node at `path`
pub fn delete_item(menu: &Menu, category: &str, path: &ItemPath) -> Result<Menu> {
    let (name, parent) = split(path)?;

    let mut updated = menu.clone();
    let level = level_mut(&mut updated, category, &parent)?;
    let index = position(level, &name, category, path)?;
    level.remove(index);
    Ok(updated)
}

/// Replace the node at `path` in place.
///
/// A container replaced by a container keeps its children. A container that
/// still has children cannot become a leaf.
pub fn update_item(
    menu: &Menu,
    category: &str,
    updated_item: MenuItem,
    path: &ItemPath,
) -> Result<Menu> {
    let (name, parent) = split(path)?;

    let mut updated = menu.clone();
    let level = level_mut(&mut updated, category, &parent)?;
    let index = position(level, &name, category, path)?;

    let replacement = prepare_replacement(&level[index], updated_item, parent.len() + 1, path)?;
    ensure_unique(level, &replacement.name, Some(&name), category, &parent)?;

    level[index] = replacement;
    Ok(updated)
}

/// Update the node at `from_path` and move it under `to_parent` in
/// `to_category`, where it becomes the last child.
///
/// When the destination is the node's current parent this is an in-place
/// [`update_item`] and the node keeps its position.
pub fn update_item_with_move(
    menu: &Menu,
    from_category: &str,
    from_path: &ItemPath,
    to_category: &str,
    to_parent: &ItemPath,
    updated_item: MenuItem,
) -> Result<Menu> {
    let (name, from_parent) = split(from_path)?;

    if from_category == to_category {
        if from_parent == *to_parent {
            return update_item(menu, from_category, updated_item, from_path);
        }
        if to_parent.starts_with(from_path) {
            return Err(MenuError::MoveIntoItself {
                path: from_path.to_string(),
            });
        }
    }

    let mut updated = menu.clone();

    let existing = {
        let level = level_mut(&mut updated, from_category, &from_parent)?;
        let index = position(level, &name, from_category, from_path)?;
        level.remove(index)
    };

    let replacement = prepare_replacement(&existing, updated_item, to_parent.len() + 1, from_path)?;

    let level = level_mut(&mut updated, to_category, to_parent)?;
    ensure_unique(level, &replacement.name, None, to_category, to_parent)?;
    level.push(replacement);

    Ok(updated)
}

/// Trimmed name, refused when empty or when it would split into several
/// path segments
fn checked_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MenuError::EmptyName);
    }
    if name.contains(PATH_SEPARATOR) {
        return Err(MenuError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

fn check_child_names(item: &MenuItem) -> Result<()> {
    for child in item.children() {
        if child.name.contains(PATH_SEPARATOR) {
            return Err(MenuError::InvalidName(child.name.clone()));
        }
        check_child_names(child)?;
    }
    Ok(())
}

fn split(path: &ItemPath) -> Result<(String, ItemPath)> {
    match path.leaf() {
        Some(name) => Ok((name.to_string(), path.parent())),
        None => Err(MenuError::EmptyPath),
    }
}

fn level_mut<'a>(
    menu: &'a mut Menu,
    category: &str,
    parent: &ItemPath,
) -> Result<&'a mut Vec<MenuItem>> {
    let found = menu
        .category_mut(category)
        .ok_or_else(|| MenuError::CategoryNotFound(category.to_string()))?;

    let mut level = &mut found.items;
    for (index, segment) in parent.segments().iter().enumerate() {
        let node = level
            .iter_mut()
            .find(|item| &item.name == segment)
            .ok_or_else(|| not_found(category, parent, index))?;
        if !node.is_container() {
            return Err(not_container(category, parent, index));
        }
        level = node.items.get_or_insert_with(Vec::new);
    }
    Ok(level)
}

fn position(level: &[MenuItem], name: &str, category: &str, path: &ItemPath) -> Result<usize> {
    level
        .iter()
        .position(|item| item.name == name)
        .ok_or_else(|| MenuError::ItemNotFound {
            category: category.to_string(),
            path: path.to_string(),
        })
}

fn ensure_unique(
    level: &[MenuItem],
    name: &str,
    except: Option<&str>,
    category: &str,
    parent: &ItemPath,
) -> Result<()> {
    if except == Some(name) {
        return Ok(());
    }
    if level.iter().any(|item| item.name == name) {
        let parent = if parent.is_root() {
            category.to_string()
        } else {
            format!("{category}/{parent}")
        };
        return Err(MenuError::DuplicateName {
            name: name.to_string(),
            parent,
        });
    }
    Ok(())
}

fn check_depth(depth: usize, item: &MenuItem) -> Result<()> {
    let bottom = depth + item.height() - 1;
    if bottom > MAX_DEPTH {
        return Err(MenuError::DepthExceeded {
            depth: bottom,
            max: MAX_DEPTH,
        });
    }
    Ok(())
}

fn prepare_replacement(
    existing: &MenuItem,
    replacement: MenuItem,
    depth: usize,
    path: &ItemPath,
) -> Result<MenuItem> {
    let mut replacement = replacement;
    replacement.name = checked_name(&replacement.name)?;

    if existing.is_container() {
        if replacement.is_container() {
            replacement.items = existing.items.clone();
        } else if !existing.children().is_empty() {
            return Err(MenuError::NonEmptyContainer {
                path: path.to_string(),
                count: existing.children().len(),
            });
        }
    }

    check_depth(depth, &replacement)?;
    replacement.conform(depth);
    Ok(replacement)
}

fn not_found(category: &str, parent: &ItemPath, index: usize) -> MenuError {
    MenuError::ItemNotFound {
        category: category.to_string(),
        path: ItemPath::new(parent.segments()[..=index].iter().cloned()).to_string(),
    }
}

fn not_container(category: &str, parent: &ItemPath, index: usize) -> MenuError {
    MenuError::NotAContainer {
        category: category.to_string(),
        path: ItemPath::new(parent.segments()[..=index].iter().cloned()).to_string(),
    }
}
