//! Shared data model for the bistro workspace.
//!
//! The menu is a list of categories, each holding a tree of items. Leaves are
//! dishes and drinks; containers (subcategories) group further items.

pub mod api;
pub mod menu;
pub mod path;
pub mod seed;

pub use api::*;
pub use menu::*;
pub use path::{ItemPath, PATH_SEPARATOR};
pub use seed::seed_menu;
