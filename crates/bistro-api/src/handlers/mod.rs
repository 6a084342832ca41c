//! Request handlers, one module per area of the site

pub mod booking;
pub mod health;
pub mod menu;
pub mod pages;
pub mod upload;

pub use booking::{create_booking, submit_booking_form};
pub use health::health_check;
pub use menu::{get_menu, put_menu};
pub use pages::{about_page, index_page, menu_page};
pub use upload::upload_image;
