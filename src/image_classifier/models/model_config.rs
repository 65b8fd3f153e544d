use std::path::PathBuf;

/// Mean of the ImageNet training set per RGB channel, on a 0..1 scale.
pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
/// Standard deviation of the ImageNet training set per RGB channel.
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub mean: [f32; 3],
    pub std: [f32; 3],
    /// Set when the model emits logits rather than probabilities.
    pub apply_softmax: bool,
}

impl ModelConfig {
    pub fn imagenet(onnx_model_path: PathBuf, labels_path: PathBuf) -> Self {
        Self {
            onnx_model_path,
            labels_path,
            input_shape: (224, 224),
            mean: IMAGENET_MEAN,
            std: IMAGENET_STD,
            apply_softmax: true,
        }
    }
}
