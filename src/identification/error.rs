use thiserror::Error;

/// Failures that abort an identification before the catalog is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("could not read the uploaded image: {0}")]
    UnreadableImage(String),

    #[error("classification failed: {0}")]
    ClassifierFailure(String),
}
