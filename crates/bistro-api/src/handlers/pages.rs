//! Server-rendered pages: landing page with the booking form, about page
//! and the customer menu browser.

use std::str::FromStr;

use axum::{
    extract::{Query, State},
    response::Html,
};
use bistro_menu::{MenuBrowser, Selection};
use bistro_types::{ItemPath, Menu, MenuItem, Nutrition, AVAILABLE_TIMES, GUEST_OPTIONS};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::error::ApiError;
use crate::templates::{ABOUT_PAGE, INDEX_PAGE, MENU_PAGE};
use crate::types::{ApiState, MenuPageQuery};

pub async fn index_page(State(state): State<ApiState>) -> Result<Html<String>, ApiError> {
    let html = state.pages.render(
        INDEX_PAGE,
        &json!({
            "title": "Ресторан",
            "today": chrono::Local::now().format("%Y-%m-%d").to_string(),
            "times": AVAILABLE_TIMES,
            "guests": GUEST_OPTIONS,
        }),
    )?;
    Ok(Html(html))
}

pub async fn about_page(State(state): State<ApiState>) -> Result<Html<String>, ApiError> {
    let html = state.pages.render(ABOUT_PAGE, &json!({ "title": "О нас" }))?;
    Ok(Html(html))
}

/// Menu browser at `?category=<index>&path=<a/b>&item=<name>`
pub async fn menu_page(
    State(state): State<ApiState>,
    Query(query): Query<MenuPageQuery>,
) -> Result<Html<String>, ApiError> {
    let menu = state.menu.load().await;
    let view = MenuView::build(&menu, &query);
    debug!(
        "Rendering menu page: category {}, path '{}'",
        view.category_index, view.path
    );

    let html = state.pages.render(MENU_PAGE, &view)?;
    Ok(Html(html))
}

#[derive(Debug, Serialize)]
struct Link {
    name: String,
    href: String,
}

#[derive(Debug, Serialize)]
struct Tab {
    name: String,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct BackLink {
    label: String,
    href: String,
}

#[derive(Debug, Serialize)]
struct Entry {
    name: String,
    description: String,
    price: Option<String>,
    weight: Option<String>,
    image: Option<String>,
    container: bool,
    count: usize,
    href: String,
}

#[derive(Debug, Serialize)]
struct Detail {
    name: String,
    description: String,
    price: Option<String>,
    weight: Option<String>,
    image: Option<String>,
    nutrition: Option<Nutrition>,
    close_href: String,
}

/// Everything the menu template needs
#[derive(Debug, Serialize)]
struct MenuView {
    title: String,
    #[serde(skip)]
    category_index: usize,
    #[serde(skip)]
    path: ItemPath,
    tabs: Vec<Tab>,
    heading: String,
    back: Option<BackLink>,
    breadcrumbs: Vec<Link>,
    entries: Vec<Entry>,
    detail: Option<Detail>,
}

impl MenuView {
    fn build(menu: &Menu, query: &MenuPageQuery) -> Self {
        let requested = query.category.unwrap_or(0);
        let category_index = if requested < menu.len() { requested } else { 0 };
        let path = ItemPath::from_str(query.path.as_deref().unwrap_or_default()).unwrap_or_default();

        let mut browser = MenuBrowser::at(category_index, path);
        let detail = match query.item.as_deref() {
            Some(name) => match browser.open(menu, name) {
                Selection::Opened(item) => Some(item),
                Selection::Entered(_) | Selection::Missing => None,
            },
            None => None,
        };
        let current = browser.current_path().clone();

        let tabs = menu
            .categories()
            .iter()
            .enumerate()
            .map(|(index, category)| Tab {
                name: category.category.clone(),
                href: menu_href(index, &ItemPath::root(), None),
                active: index == category_index,
            })
            .collect();

        let back = browser.back_label(menu).map(|label| BackLink {
            label,
            href: menu_href(category_index, &current.parent(), None),
        });

        let breadcrumbs = browser
            .breadcrumbs(menu)
            .into_iter()
            .map(|(name, crumb)| Link {
                name,
                href: menu_href(category_index, &crumb, None),
            })
            .collect();

        let entries = browser
            .current_items(menu)
            .iter()
            .map(|item| entry(category_index, &current, item))
            .collect();

        let detail = detail.map(|item| Detail {
            close_href: menu_href(category_index, &current, None),
            name: item.name,
            description: item.description.unwrap_or_default(),
            price: item.price.filter(|p| !p.is_empty()),
            weight: item.weight,
            image: item.image.filter(|i| !i.is_empty()),
            nutrition: item.nutrition,
        });

        Self {
            title: "Меню".to_string(),
            category_index,
            heading: browser.title(menu).unwrap_or_else(|| "Меню".to_string()),
            path: current,
            tabs,
            back,
            breadcrumbs,
            entries,
            detail,
        }
    }
}

fn entry(category_index: usize, current: &ItemPath, item: &MenuItem) -> Entry {
    let container = item.is_container();
    let href = if container {
        menu_href(category_index, &current.child(item.name.clone()), None)
    } else {
        menu_href(category_index, current, Some(&item.name))
    };

    Entry {
        name: item.name.clone(),
        description: item.description().to_string(),
        price: item.price.clone().filter(|p| !p.is_empty()),
        weight: item.weight.clone(),
        image: item.image.clone().filter(|i| !i.is_empty()),
        container,
        count: item.children().len(),
        href,
    }
}

/// Link to the browser at a category, path and optionally an opened dish
fn menu_href(category_index: usize, path: &ItemPath, item: Option<&str>) -> String {
    let mut href = format!("/menu?category={category_index}");
    if !path.is_root() {
        href.push_str("&path=");
        href.push_str(&urlencoding::encode(&path.to_string()));
    }
    if let Some(item) = item {
        href.push_str("&item=");
        href.push_str(&urlencoding::encode(item));
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_types::seed_menu;
    use rstest::rstest;

    fn query(category: Option<usize>, path: Option<&str>, item: Option<&str>) -> MenuPageQuery {
        MenuPageQuery {
            category,
            path: path.map(str::to_string),
            item: item.map(str::to_string),
        }
    }

    #[rstest]
    #[case(0, ItemPath::root(), None, "/menu?category=0")]
    #[case(5, ItemPath::new(["Ром"]), None, "/menu?category=5&path=%D0%A0%D0%BE%D0%BC")]
    #[case(1, ItemPath::new(["a", "b"]), Some("c d"), "/menu?category=1&path=a%2Fb&item=c%20d")]
    fn test_menu_href(
        #[case] category: usize,
        #[case] path: ItemPath,
        #[case] item: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(menu_href(category, &path, item), expected);
    }

    #[test]
    fn test_view_inside_subcategory() {
        let menu = seed_menu();
        let spirits = menu.len() - 1;
        let view = MenuView::build(&menu, &query(Some(spirits), Some("Ром"), None));

        assert_eq!(view.heading, "Ром");
        assert!(view.tabs[spirits].active);
        assert_eq!(view.back.as_ref().unwrap().label, "Крепкий алкоголь");
        assert_eq!(view.breadcrumbs.len(), 2);
        assert_eq!(view.entries.len(), 2);
        assert!(view.entries.iter().all(|e| !e.container));
        assert!(view.detail.is_none());
    }

    #[test]
    fn test_view_opens_dish_detail() {
        let menu = seed_menu();
        let spirits = menu.len() - 1;
        let view = MenuView::build(
            &menu,
            &query(Some(spirits), Some("Джин"), Some("Monkey 47")),
        );

        let detail = view.detail.expect("dish opened");
        assert_eq!(detail.name, "Monkey 47");
        assert!(detail.nutrition.is_some());
        assert!(detail.close_href.ends_with(&format!("path={}", urlencoding::encode("Джин"))));
    }

    #[test]
    fn test_bad_index_and_broken_path() {
        let menu = seed_menu();
        let view = MenuView::build(&menu, &query(Some(99), Some("Nowhere"), None));

        assert_eq!(view.category_index, 0);
        assert!(view.tabs[0].active);
        assert!(view.entries.is_empty());
    }
}
