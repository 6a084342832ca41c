//! Bundled default menu, served whenever nothing has been persisted yet or
//! the stored document cannot be read.

use crate::menu::Menu;

pub const SEED_MENU_JSON: &str = include_str!("../data/seed_menu.json");

pub fn seed_menu() -> Menu {
    serde_json::from_str(SEED_MENU_JSON).unwrap_or_default()
}
