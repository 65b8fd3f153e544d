use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{
    Classification, ClassificationResult, ImageClassifier,
};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

const LABELS: [&str; 12] = [
    "daisy",
    "pot",
    "cardoon",
    "corn",
    "acorn",
    "hip",
    "buckeye",
    "head cabbage",
    "broccoli",
    "cucumber",
    "Mint",
    "Thyme",
];

enum Behavior {
    Random,
    #[cfg(test)]
    Scripted(Vec<Classification>),
    #[cfg(test)]
    Failing(String),
}

/// Stand-in classifier for running without a model file.
///
/// By default it draws random guesses from a small vocabulary that includes
/// a few catalog names, so both the match and the fallback paths show up.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    behavior: Behavior,
    top_k: usize,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, top_k: usize) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier_fake"),
            behavior: Behavior::Random,
            top_k,
        }
    }

    /// Always answers with `classifications`, ranked and truncated.
    #[cfg(test)]
    pub fn scripted(
        logger: Arc<dyn Logger + Send + Sync>,
        top_k: usize,
        classifications: Vec<Classification>,
    ) -> Self {
        Self {
            behavior: Behavior::Scripted(classifications),
            ..Self::new(logger, top_k)
        }
    }

    /// Always fails with an inference error.
    #[cfg(test)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, message: &str) -> Self {
        Self {
            behavior: Behavior::Failing(message.to_string()),
            ..Self::new(logger, 0)
        }
    }

    fn random_classifications(&self) -> Result<Vec<Classification>, ClassifierError> {
        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, LABELS.len())
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let confidence_dist =
            Uniform::new(0.0f32, 1.0).map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let scores: Vec<f32> = (0..self.top_k)
            .map(|_| confidence_dist.sample(&mut rng))
            .collect();
        // Leave some mass for the labels that were not drawn.
        let total = scores.iter().sum::<f32>() + confidence_dist.sample(&mut rng) + f32::EPSILON;

        Ok(scores
            .into_iter()
            .map(|score| Classification::new(LABELS[index_dist.sample(&mut rng)], score / total))
            .collect())
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifierError> {
        let _ = self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ));

        let classifications = match &self.behavior {
            Behavior::Random => self.random_classifications()?,
            #[cfg(test)]
            Behavior::Scripted(classifications) => classifications.clone(),
            #[cfg(test)]
            Behavior::Failing(message) => {
                return Err(ClassifierError::Inference(message.clone()));
            }
        };

        Ok(ClassificationResult::ranked(classifications, self.top_k))
    }
}
