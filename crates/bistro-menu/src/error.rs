use bistro_store::StoreError;
use thiserror::Error;

/// Result type for tree operations
pub type Result<T> = std::result::Result<T, MenuError>;

/// Result type for persisting service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Reasons a tree operation is refused. The input document is never
/// modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Item not found: '{path}' in category '{category}'")]
    ItemNotFound { category: String, path: String },

    #[error("'{path}' in category '{category}' is not a subcategory")]
    NotAContainer { category: String, path: String },

    #[error("An item named '{name}' already exists in '{parent}'")]
    DuplicateName { name: String, parent: String },

    #[error("Nesting depth {depth} exceeds the limit of {max}")]
    DepthExceeded { depth: usize, max: usize },

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Name '{0}' must not contain '/'")]
    InvalidName(String),

    #[error("Item path must not be empty")]
    EmptyPath,

    #[error("Cannot move '{path}' into its own subtree")]
    MoveIntoItself { path: String },

    #[error("Subcategory '{path}' still holds {count} items")]
    NonEmptyContainer { path: String, count: usize },
}

/// Failure of a service call: either the edit was refused or the document
/// could not be persisted
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error("Failed to persist menu: {0}")]
    Store(#[from] StoreError),
}
