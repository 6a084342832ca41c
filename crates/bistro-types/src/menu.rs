use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Maximum nesting depth of a menu item. Items directly inside a category
/// sit at depth 1.
pub const MAX_DEPTH: usize = 3;

/// Fields of a stored node this model does not know about. Kept so that a
/// document read and written back is unchanged.
pub type ExtraFields = Map<String, Value>;

/// Nutrition facts shown in the dish detail view.
///
/// Values are kept as JSON numbers: integers stay integers and fractional
/// grams are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: Number,
    pub protein: Number,
    pub fats: Number,
    pub carbs: Number,
}

impl Nutrition {
    pub fn new(calories: f64, protein: f64, fats: f64, carbs: f64) -> Self {
        Self {
            calories: number(calories),
            protein: number(protein),
            fats: number(fats),
            carbs: number(carbs),
        }
    }

    pub fn has_calories(&self) -> bool {
        self.calories.as_f64().is_some_and(|c| c > 0.0)
    }
}

impl Default for Nutrition {
    fn default() -> Self {
        Self {
            calories: Number::from(0),
            protein: Number::from(0),
            fats: Number::from(0),
            carbs: Number::from(0),
        }
    }
}

/// JSON number for `value`, integral when it has no fractional part.
/// Non-finite values become zero.
pub fn number(value: f64) -> Number {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}

/// A node of the menu tree: either a dish/drink (leaf) or a subcategory
/// (container) holding further items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subcategory: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuItem>>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl MenuItem {
    /// Create a leaf item
    pub fn dish(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        nutrition: Nutrition,
    ) -> Self {
        Self {
            name: name.into(),
            price: Some(price.into()),
            description: Some(description.into()),
            image: Some(image.into()),
            nutrition: Some(nutrition),
            ..Default::default()
        }
    }

    /// Create an empty container item
    pub fn subcategory(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            is_subcategory: Some(true),
            items: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn is_container(&self) -> bool {
        self.is_subcategory.unwrap_or(false)
    }

    /// Children of a container; always empty for a leaf, even one that
    /// carries a stray `items` array
    pub fn children(&self) -> &[MenuItem] {
        if !self.is_container() {
            return &[];
        }
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Number of levels this node occupies, counting itself
    pub fn height(&self) -> usize {
        1 + self.children().iter().map(MenuItem::height).max().unwrap_or(0)
    }

    /// Enforce the node shape for the given depth: containers drop the leaf
    /// fields and get their `level`, leaves drop `items` and `level`.
    /// Children are conformed recursively.
    pub fn conform(&mut self, depth: usize) {
        if self.is_container() {
            self.price = None;
            self.image = None;
            self.nutrition = None;
            self.weight = None;
            self.level = Some(depth.min(u8::MAX as usize) as u8);
            let children = self.items.get_or_insert_with(Vec::new);
            for child in children.iter_mut() {
                child.conform(depth + 1);
            }
        } else {
            self.is_subcategory = None;
            self.items = None;
            self.level = None;
            if self.nutrition.is_none() {
                self.nutrition = Some(Nutrition::default());
            }
        }
    }

    /// Count of leaf items in this subtree
    pub fn dish_count(&self) -> usize {
        if self.is_container() {
            self.children().iter().map(MenuItem::dish_count).sum()
        } else {
            1
        }
    }
}

/// One top-level menu tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl MenuCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            category: name.into(),
            items: Vec::new(),
            extra: ExtraFields::new(),
        }
    }
}

/// The whole menu document, persisted and exchanged as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu(pub Vec<MenuCategory>);

impl Menu {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self(categories)
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.0
    }

    pub fn category(&self, name: &str) -> Option<&MenuCategory> {
        self.0.iter().find(|c| c.category == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut MenuCategory> {
        self.0.iter_mut().find(|c| c.category == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<MenuCategory> {
        self.0
    }
}

impl From<Vec<MenuCategory>> for Menu {
    fn from(categories: Vec<MenuCategory>) -> Self {
        Self(categories)
    }
}
