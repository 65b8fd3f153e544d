use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("catalog has no categories")]
    EmptyCatalog,

    #[error("category name must not be empty")]
    EmptyCategoryName,

    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("category {0} has no plants")]
    EmptyCategory(String),

    #[error("plant name in category {category} must not be empty")]
    EmptyPlantName { category: String },

    #[error("duplicate plant {plant} in category {category}")]
    DuplicatePlant { category: String, plant: String },

    #[error("plant {plant} in category {category} has an empty {field}")]
    EmptyField {
        category: String,
        plant: String,
        field: &'static str,
    },

    #[error("image for plant {plant} not found at {}", path.display())]
    MissingAsset { plant: String, path: PathBuf },
}
