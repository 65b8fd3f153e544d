use crate::image_classifier::error::ClassifierError;
use crate::plant_catalog::error::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid plant catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("classifier unavailable: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("failed to read {}: {source}", path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Render(String),

    #[error("window error: {0}")]
    Gui(String),
}
