use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{ClassificationResult, ImageClassifier};
use crate::image_classifier::labels::load_labels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::image_classifier::tract::scores::{align_scores, softmax};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

/// Pretrained ImageNet classifier served from an ONNX file.
pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    top_k: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        top_k: usize,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let logger = logger.with_namespace("tract_onnx");
        let (height, width) = config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::ModelLoad {
                path: config.onnx_model_path.clone(),
                message: e.to_string(),
            })?;

        let labels = load_labels(&config.labels_path)?;

        let _ = logger.info(&format!(
            "Loaded {} with {} labels, input {}x{}",
            config.onnx_model_path.display(),
            labels.len(),
            width,
            height
        ));

        Ok(Self {
            model,
            labels,
            config,
            top_k,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifierError> {
        let (height, width) = self.config.input_shape;

        let input = resize_image_to_tensor(image, width, height, self.config.mean, self.config.std)
            .map_err(|e| ClassifierError::Preprocess(e.to_string()))?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let raw: Vec<f32> = output.iter().copied().collect();

        let scores = align_scores(&raw, self.labels.len()).ok_or(ClassifierError::OutputShape {
            expected: self.labels.len(),
            actual: raw.len(),
        })?;

        let probabilities = if self.config.apply_softmax {
            softmax(scores)
        } else {
            scores.to_vec()
        };

        let result = ClassificationResult::from_scores(&self.labels, &probabilities, self.top_k);

        let _ = self.logger.info(&format!("Classifications: {:?}", result));

        Ok(result)
    }
}
