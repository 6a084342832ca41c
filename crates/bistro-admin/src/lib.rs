//! # Bistro Admin
//!
//! Command-line admin panel. The menu is edited through the server's
//! whole-document API: [`RemoteMenuStore`] plugs the HTTP endpoints into
//! [`bistro_menu::MenuService`], so the CLI runs the same tree operations the
//! server-side code does.

pub mod cli;
pub mod commands;
pub mod remote;

pub use cli::{Cli, Commands, ItemFields};
pub use commands::{execute, AdminService};
pub use remote::RemoteMenuStore;
