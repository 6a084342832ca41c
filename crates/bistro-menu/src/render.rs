//! Admin tree view of the whole menu.
//!
//! Categories always list their top level. Subcategories are collapsed to a
//! one-line summary unless their path is marked expanded in
//! [`ExpandState`].

use std::collections::HashSet;
use std::fmt;

use ascii_tree::Tree;
use bistro_types::{ItemPath, Menu, MenuItem};

/// Which subcategories are expanded in the tree view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: HashSet<(String, ItemPath)>,
    expand_all: bool,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything expanded
    pub fn all() -> Self {
        Self {
            expanded: HashSet::new(),
            expand_all: true,
        }
    }

    /// Expand the subcategory at `path` and every subcategory above it
    pub fn expand(&mut self, category: &str, path: &ItemPath) {
        let mut current = ItemPath::root();
        for segment in path.segments() {
            current = current.child(segment.clone());
            self.expanded.insert((category.to_string(), current.clone()));
        }
    }

    pub fn collapse(&mut self, category: &str, path: &ItemPath) {
        self.expanded.remove(&(category.to_string(), path.clone()));
    }

    /// Flip one node; returns whether it is now expanded
    pub fn toggle(&mut self, category: &str, path: &ItemPath) -> bool {
        let key = (category.to_string(), path.clone());
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    pub fn is_expanded(&self, category: &str, path: &ItemPath) -> bool {
        self.expand_all || self.expanded.contains(&(category.to_string(), path.clone()))
    }
}

/// Render the menu as an ASCII tree
pub fn render_menu(menu: &Menu, state: &ExpandState) -> Result<String, fmt::Error> {
    let categories = menu
        .categories()
        .iter()
        .map(|category| {
            let children = category
                .items
                .iter()
                .map(|item| item_node(&category.category, &ItemPath::root(), item, state))
                .collect();
            let dishes: usize = category.items.iter().map(MenuItem::dish_count).sum();
            Tree::Node(format!("{} ({} dishes)", category.category, dishes), children)
        })
        .collect();

    let tree = Tree::Node(format!("Menu ({} categories)", menu.len()), categories);
    let mut buffer = String::new();
    ascii_tree::write_tree(&mut buffer, &tree)?;
    Ok(buffer)
}

fn item_node(category: &str, parent: &ItemPath, item: &MenuItem, state: &ExpandState) -> Tree {
    if !item.is_container() {
        return Tree::Leaf(vec![leaf_label(item)]);
    }

    let path = parent.child(item.name.clone());
    if state.is_expanded(category, &path) {
        let children = item
            .children()
            .iter()
            .map(|child| item_node(category, &path, child, state))
            .collect();
        Tree::Node(format!("[-] {}", item.name), children)
    } else {
        Tree::Leaf(vec![format!(
            "[+] {} ({} items)",
            item.name,
            item.children().len()
        )])
    }
}

fn leaf_label(item: &MenuItem) -> String {
    let mut label = item.name.clone();
    if let Some(price) = item.price.as_deref().filter(|p| !p.is_empty()) {
        label.push_str(&format!("  {price}"));
    }
    if let Some(weight) = item.weight.as_deref() {
        label.push_str(&format!("  {weight}"));
    }
    if let Some(nutrition) = item.nutrition.as_ref().filter(|n| n.has_calories()) {
        label.push_str(&format!("  [{} kcal]", nutrition.calories));
    }
    label
}
