//! Customer-facing menu navigation.
//!
//! The browser shows one category tab at a time and the level of the tree
//! reached by following `current_path`. Entering a subcategory pushes its
//! name, going back pops it, and picking a dish opens its detail view. None
//! of this touches the stored document.

use bistro_types::{ItemPath, Menu, MenuCategory, MenuItem};

/// Outcome of picking an entry on the current level
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A subcategory was entered
    Entered(String),
    /// A dish was opened in the detail view
    Opened(MenuItem),
    /// No entry with that name on the current level
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuBrowser {
    category_index: usize,
    current_path: ItemPath,
    selected: Option<MenuItem>,
}

impl MenuBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Browser restored at a category tab and breadcrumb path
    pub fn at(category_index: usize, current_path: ItemPath) -> Self {
        Self {
            category_index,
            current_path,
            selected: None,
        }
    }

    pub fn category_index(&self) -> usize {
        self.category_index
    }

    pub fn current_path(&self) -> &ItemPath {
        &self.current_path
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.selected.as_ref()
    }

    /// Switch tabs; the breadcrumb and detail view reset
    pub fn select_category(&mut self, index: usize) {
        self.category_index = index;
        self.current_path = ItemPath::root();
        self.selected = None;
    }

    /// Selected category, falling back to the first one when the index is
    /// out of range
    pub fn current_category<'a>(&self, menu: &'a Menu) -> Option<&'a MenuCategory> {
        let categories = menu.categories();
        categories
            .get(self.category_index)
            .or_else(|| categories.first())
    }

    /// Entries on the current level; empty when the path no longer leads
    /// anywhere
    pub fn current_items<'a>(&self, menu: &'a Menu) -> &'a [MenuItem] {
        let Some(category) = self.current_category(menu) else {
            return &[];
        };

        let mut level: &'a [MenuItem] = &category.items;
        for segment in self.current_path.segments() {
            match level
                .iter()
                .find(|item| &item.name == segment)
                .filter(|item| item.is_container())
                .map(MenuItem::children)
            {
                Some(children) => level = children,
                None => return &[],
            }
        }
        level
    }

    /// Pick the entry called `name` on the current level
    pub fn open(&mut self, menu: &Menu, name: &str) -> Selection {
        let Some(item) = self.current_items(menu).iter().find(|item| item.name == name) else {
            return Selection::Missing;
        };

        if item.is_container() && item.items.is_some() {
            self.current_path = self.current_path.child(name);
            Selection::Entered(name.to_string())
        } else {
            self.selected = Some(item.clone());
            Selection::Opened(item.clone())
        }
    }

    /// Go up one level. Returns false when already at the top.
    pub fn back(&mut self) -> bool {
        if self.current_path.is_root() {
            return false;
        }
        self.current_path = self.current_path.parent();
        true
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Where "back" leads: the previous path segment, or the category name
    /// when one level deep. `None` at the top level.
    pub fn back_label(&self, menu: &Menu) -> Option<String> {
        let segments = self.current_path.segments();
        if segments.is_empty() {
            return None;
        }
        if segments.len() >= 2 {
            return Some(segments[segments.len() - 2].clone());
        }
        self.current_category(menu).map(|c| c.category.clone())
    }

    /// Heading of the current level
    pub fn title(&self, menu: &Menu) -> Option<String> {
        match self.current_path.leaf() {
            Some(name) => Some(name.to_string()),
            None => self.current_category(menu).map(|c| c.category.clone()),
        }
    }

    /// Breadcrumb trail: the category followed by every entered subcategory,
    /// each paired with the path that reopens it
    pub fn breadcrumbs(&self, menu: &Menu) -> Vec<(String, ItemPath)> {
        let mut crumbs = Vec::new();
        if let Some(category) = self.current_category(menu) {
            crumbs.push((category.category.clone(), ItemPath::root()));
        }
        let mut path = ItemPath::root();
        for segment in self.current_path.segments() {
            path = path.child(segment.clone());
            crumbs.push((segment.clone(), path.clone()));
        }
        crumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_types::Nutrition;

    fn menu() -> Menu {
        let zacapa = MenuItem::dish("Zacapa", "2100₽", "", "", Nutrition::default());
        let aged = MenuItem::subcategory("Aged", "").with_items(vec![zacapa]);
        let rum = MenuItem::subcategory("Rum", "").with_items(vec![aged]);
        let mut spirits = MenuCategory::new("Spirits");
        spirits.items = vec![rum];
        let mut tea = MenuCategory::new("Tea");
        tea.items = vec![MenuItem::dish("Oolong", "590₽", "", "", Nutrition::default())];
        Menu::new(vec![tea, spirits])
    }

    #[test]
    fn test_navigate_down_and_back() {
        let menu = menu();
        let mut browser = MenuBrowser::new();
        browser.select_category(1);

        assert_eq!(browser.title(&menu).as_deref(), Some("Spirits"));
        assert_eq!(browser.back_label(&menu), None);

        assert_eq!(browser.open(&menu, "Rum"), Selection::Entered("Rum".to_string()));
        assert_eq!(browser.back_label(&menu).as_deref(), Some("Spirits"));

        assert_eq!(browser.open(&menu, "Aged"), Selection::Entered("Aged".to_string()));
        assert_eq!(browser.current_path(), &ItemPath::new(["Rum", "Aged"]));
        assert_eq!(browser.back_label(&menu).as_deref(), Some("Rum"));
        assert_eq!(browser.current_items(&menu)[0].name, "Zacapa");

        assert!(browser.back());
        assert!(browser.back());
        assert!(!browser.back());
    }

    #[test]
    fn test_opening_a_dish_shows_detail() {
        let menu = menu();
        let mut browser = MenuBrowser::new();

        match browser.open(&menu, "Oolong") {
            Selection::Opened(item) => assert_eq!(item.price.as_deref(), Some("590₽")),
            other => panic!("unexpected selection {other:?}"),
        }
        assert!(browser.selected_item().is_some());
        assert!(browser.current_path().is_root());

        browser.close_detail();
        assert!(browser.selected_item().is_none());
        assert_eq!(browser.open(&menu, "Espresso"), Selection::Missing);
    }

    #[test]
    fn test_switching_category_resets_path() {
        let menu = menu();
        let mut browser = MenuBrowser::at(1, ItemPath::new(["Rum"]));
        assert_eq!(browser.current_items(&menu)[0].name, "Aged");

        browser.select_category(0);
        assert!(browser.current_path().is_root());
        assert_eq!(browser.current_items(&menu)[0].name, "Oolong");
    }

    #[test]
    fn test_broken_path_and_bad_index() {
        let menu = menu();
        let browser = MenuBrowser::at(1, ItemPath::new(["Gin"]));
        assert!(browser.current_items(&menu).is_empty());

        let browser = MenuBrowser::at(42, ItemPath::root());
        assert_eq!(browser.current_category(&menu).unwrap().category, "Tea");

        assert!(MenuBrowser::new().current_items(&Menu::default()).is_empty());
    }

    #[test]
    fn test_leaf_with_stray_items_is_not_entered() {
        let stray = MenuItem {
            items: Some(vec![MenuItem::dish("Ghost", "1₽", "", "", Nutrition::default())]),
            ..MenuItem::dish("Pu-erh", "690₽", "", "", Nutrition::default())
        };
        let mut tea = MenuCategory::new("Tea");
        tea.items = vec![stray];
        let menu = Menu::new(vec![tea]);

        let browser = MenuBrowser::at(0, ItemPath::new(["Pu-erh"]));
        assert!(browser.current_items(&menu).is_empty());

        let mut browser = MenuBrowser::new();
        assert!(matches!(browser.open(&menu, "Pu-erh"), Selection::Opened(_)));
    }

    #[test]
    fn test_breadcrumbs() {
        let menu = menu();
        let browser = MenuBrowser::at(1, ItemPath::new(["Rum", "Aged"]));
        let crumbs = browser.breadcrumbs(&menu);

        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[0], ("Spirits".to_string(), ItemPath::root()));
        assert_eq!(crumbs[2], ("Aged".to_string(), ItemPath::new(["Rum", "Aged"])));
    }
}
