use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to load model {}: {message}", path.display())]
    ModelLoad { path: PathBuf, message: String },

    #[error("failed to read labels {}: {source}", path.display())]
    Labels {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("labels file {} has no labels", .0.display())]
    EmptyLabels(PathBuf),

    #[error("failed to prepare input tensor: {0}")]
    Preprocess(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("model produced {actual} scores but {expected} labels are loaded")]
    OutputShape { expected: usize, actual: usize },
}
