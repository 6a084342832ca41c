//! Handlebars pages embedded in the binary

use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

pub const INDEX_PAGE: &str = "index";
pub const ABOUT_PAGE: &str = "about";
pub const MENU_PAGE: &str = "menu";
pub const BOOKING_CONFIRMED_PAGE: &str = "booking_confirmed";

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../templates/header.hbs")),
    ("footer", include_str!("../templates/footer.hbs")),
];

const PAGES: &[(&str, &str)] = &[
    (INDEX_PAGE, include_str!("../templates/index.hbs")),
    (ABOUT_PAGE, include_str!("../templates/about.hbs")),
    (MENU_PAGE, include_str!("../templates/menu.hbs")),
    (
        BOOKING_CONFIRMED_PAGE,
        include_str!("../templates/booking_confirmed.hbs"),
    ),
];

/// Compiled page templates
#[derive(Debug)]
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        for (name, source) in PARTIALS {
            handlebars.register_partial(name, *source)?;
        }
        for (name, source) in PAGES {
            handlebars.register_template_string(name, *source)?;
        }

        debug!("Registered {} page templates", PAGES.len());
        Ok(Self { handlebars })
    }

    pub fn render<T: Serialize>(&self, page: &str, data: &T) -> Result<String, handlebars::RenderError> {
        self.handlebars.render(page, data)
    }
}
