//! # Bistro Menu
//!
//! Operations over the menu tree and the views built on top of it.
//!
//! - [`tree`]: pure add/delete/update/move of items addressed by name paths.
//!   Each operation takes the current document and returns a new one.
//! - [`service`]: [`MenuService`] applies a tree operation and persists the
//!   whole resulting document through a [`bistro_store::MenuStore`].
//! - [`browser`]: customer-facing navigation state (category tab, breadcrumb
//!   path, opened dish).
//! - [`render`]: admin tree view with per-node expand state.

pub mod browser;
pub mod error;
pub mod price;
pub mod render;
pub mod service;
pub mod tree;

pub use browser::{MenuBrowser, Selection};
pub use error::{MenuError, Result, ServiceError, ServiceResult};
pub use price::{normalize_price, CURRENCY_SIGN};
pub use render::{render_menu, ExpandState};
pub use service::MenuService;
