use std::path::PathBuf;

use bistro_types::{number, ItemPath, MenuItem, Nutrition};
use clap::{Args, Parser, Subcommand};

pub const DEFAULT_SERVER: &str = "http://localhost:3000";

#[derive(Debug, Parser)]
#[command(author, version, about = "Edit the bistro menu through the API", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the bistro API server
    #[arg(long, global = true, env = "BISTRO_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the menu as a tree
    Show {
        /// Expand the subcategory at CATEGORY:PATH (repeatable)
        #[arg(long, value_name = "CATEGORY:PATH")]
        expand: Vec<String>,
        /// Expand every subcategory
        #[arg(long)]
        all: bool,
    },
    /// Add an empty category
    AddCategory { name: String },
    /// Delete a category and everything in it
    DeleteCategory {
        name: String,
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Add a dish under a category or subcategory
    AddItem {
        category: String,
        /// Subcategory path to add under, e.g. "Ром/Выдержанный"
        #[arg(long, default_value = "")]
        parent: ItemPath,
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// Add an empty subcategory
    AddSubcategory {
        category: String,
        #[arg(long, default_value = "")]
        parent: ItemPath,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete the item at PATH
    DeleteItem {
        category: String,
        path: ItemPath,
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Change fields of the item at PATH
    UpdateItem {
        category: String,
        path: ItemPath,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// Move the item at PATH to another category or parent, optionally
    /// changing fields on the way
    MoveItem {
        category: String,
        path: ItemPath,
        #[arg(long)]
        to_category: String,
        #[arg(long, default_value = "")]
        to_parent: ItemPath,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// Upload an image and print its URL
    Upload { file: PathBuf },
}

/// Editable fields of a dish. Unset flags leave the field unchanged.
#[derive(Debug, Clone, Default, Args)]
pub struct ItemFields {
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Image URL
    #[arg(long, conflicts_with = "image_file")]
    pub image: Option<String>,
    /// Local image to upload first
    #[arg(long, value_name = "FILE")]
    pub image_file: Option<PathBuf>,
    #[arg(long)]
    pub weight: Option<String>,
    #[arg(long)]
    pub calories: Option<f64>,
    #[arg(long)]
    pub protein: Option<f64>,
    #[arg(long)]
    pub fats: Option<f64>,
    #[arg(long)]
    pub carbs: Option<f64>,
}

impl ItemFields {
    /// Apply the set flags to `item`. `image` is the uploaded URL when
    /// `--image-file` was given.
    pub fn apply(&self, item: &mut MenuItem, image: Option<String>) {
        if let Some(price) = &self.price {
            item.price = Some(price.clone());
        }
        if let Some(description) = &self.description {
            item.description = Some(description.clone());
        }
        if let Some(image) = image.or_else(|| self.image.clone()) {
            item.image = Some(image);
        }
        if let Some(weight) = &self.weight {
            item.weight = Some(weight.clone());
        }

        if self.calories.is_some()
            || self.protein.is_some()
            || self.fats.is_some()
            || self.carbs.is_some()
        {
            let current = item.nutrition.take().unwrap_or_default();
            item.nutrition = Some(Nutrition {
                calories: self.calories.map(number).unwrap_or(current.calories),
                protein: self.protein.map(number).unwrap_or(current.protein),
                fats: self.fats.map(number).unwrap_or(current.fats),
                carbs: self.carbs.map(number).unwrap_or(current.carbs),
            });
        }
    }

    /// New dish called `name` with these fields
    pub fn to_dish(&self, name: &str, image: Option<String>) -> MenuItem {
        let mut item = MenuItem::dish(name, "", "", "", Nutrition::default());
        self.apply(&mut item, image);
        item
    }
}

/// Split a `CATEGORY:PATH` expand target
pub fn parse_expand_target(raw: &str) -> Option<(String, ItemPath)> {
    let (category, path) = raw.split_once(':')?;
    let path: ItemPath = path.parse().unwrap_or_default();
    if category.trim().is_empty() || path.is_root() {
        return None;
    }
    Some((category.trim().to_string(), path))
}
