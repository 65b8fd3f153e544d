use crate::image_classifier::error::ClassifierError;
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: &str, confidence: f32) -> Self {
        Self {
            label: label.to_string(),
            confidence,
        }
    }
}

/// Ranked guesses for one image, highest confidence first.
///
/// Confidences are clamped to `[0, 1]` and non-finite scores are dropped, so
/// every value held here is a usable probability.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResult {
    classifications: Vec<Classification>,
}

impl ClassificationResult {
    pub fn ranked(classifications: Vec<Classification>, top_k: usize) -> Self {
        let mut classifications: Vec<Classification> = classifications
            .into_iter()
            .filter(|c| c.confidence.is_finite())
            .map(|c| Classification {
                confidence: c.confidence.clamp(0.0, 1.0),
                ..c
            })
            .collect();

        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        classifications.truncate(top_k);

        Self { classifications }
    }

    /// Pairs `scores[i]` with `labels[i]` and keeps the `top_k` best.
    pub fn from_scores<S: AsRef<str>>(labels: &[S], scores: &[f32], top_k: usize) -> Self {
        let classifications = scores
            .iter()
            .enumerate()
            .map(|(index, &confidence)| Classification {
                label: labels
                    .get(index)
                    .map(|label| label.as_ref().to_string())
                    .unwrap_or_else(|| format!("class {}", index)),
                confidence,
            })
            .collect();

        Self::ranked(classifications, top_k)
    }

    /// The identification candidate.
    pub fn top(&self) -> Option<&Classification> {
        self.classifications.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Classification> {
        self.classifications.iter()
    }

    pub fn len(&self) -> usize {
        self.classifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifications.is_empty()
    }
}

pub trait ImageClassifier {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ranked(result: &ClassificationResult) {
        let confidences: Vec<f32> = result.iter().map(|c| c.confidence).collect();
        assert!(confidences.iter().all(|c| (0.0..=1.0).contains(c)));
        assert!(confidences.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_ranked_sorts_descending_and_truncates() {
        let result = ClassificationResult::ranked(
            vec![
                Classification::new("daisy", 0.1),
                Classification::new("pot", 0.6),
                Classification::new("cardoon", 0.2),
                Classification::new("vase", 0.05),
            ],
            3,
        );

        let labels: Vec<&str> = result.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["pot", "cardoon", "daisy"]);
        assert_eq!(result.top().unwrap().label, "pot");
        assert_ranked(&result);
    }

    #[test]
    fn test_ranked_clamps_and_drops_non_finite() {
        let result = ClassificationResult::ranked(
            vec![
                Classification::new("too high", 1.7),
                Classification::new("nan", f32::NAN),
                Classification::new("negative", -0.3),
                Classification::new("inf", f32::INFINITY),
            ],
            5,
        );

        assert_eq!(
            result,
            ClassificationResult::ranked(
                vec![
                    Classification::new("too high", 1.0),
                    Classification::new("negative", 0.0),
                ],
                5
            )
        );
        assert_ranked(&result);
    }

    #[test]
    fn test_ranked_keeps_input_order_on_ties() {
        let result = ClassificationResult::ranked(
            vec![
                Classification::new("first", 0.5),
                Classification::new("second", 0.5),
            ],
            2,
        );

        assert_eq!(result.top().unwrap().label, "first");
    }

    #[test]
    fn test_from_scores_maps_labels_by_index() {
        let labels = ["tench", "goldfish", "daisy"];
        let result = ClassificationResult::from_scores(&labels, &[0.1, 0.2, 0.7, 0.0], 3);

        let pairs: Vec<(&str, f32)> = result
            .iter()
            .map(|c| (c.label.as_str(), c.confidence))
            .collect();
        assert_eq!(pairs, vec![("daisy", 0.7), ("goldfish", 0.2), ("tench", 0.1)]);
    }

    #[test]
    fn test_from_scores_names_unlabelled_classes() {
        let labels: [&str; 0] = [];
        let result = ClassificationResult::from_scores(&labels, &[0.9], 3);

        assert_eq!(result.top().unwrap().label, "class 0");
    }

    #[test]
    fn test_empty_result_has_no_candidate() {
        let result = ClassificationResult::ranked(vec![], 3);

        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.top().is_none());
    }
}
