/// Numerically stable softmax over raw logits.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    if sum == 0.0 || !sum.is_finite() {
        return vec![0.0; logits.len()];
    }
    exps.into_iter().map(|x| x / sum).collect()
}

/// Lines up a flat model output with the label list.
///
/// TF-slim exports carry an extra leading background class; it is dropped so
/// that score `i` belongs to label `i`.
pub fn align_scores(scores: &[f32], label_count: usize) -> Option<&[f32]> {
    match scores.len() {
        len if len == label_count => Some(scores),
        len if len == label_count + 1 => Some(&scores[1..]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one_and_keeps_order() {
        let probabilities = softmax(&[1.0, 3.0, 2.0]);

        let sum: f32 = probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(probabilities[1] > probabilities[2]);
        assert!(probabilities[2] > probabilities[0]);
    }

    #[test]
    fn test_softmax_large_logits_stay_finite() {
        let probabilities = softmax(&[1000.0, 1000.0]);

        assert!((probabilities[0] - 0.5).abs() < 1e-6);
        assert!((probabilities[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_softmax_empty() {
        assert!(softmax(&[]).is_empty());
    }

    #[test]
    fn test_align_scores() {
        let scores = [0.1, 0.2, 0.3];

        assert_eq!(align_scores(&scores, 3), Some(&scores[..]));
        assert_eq!(align_scores(&scores, 2), Some(&scores[1..]));
        assert_eq!(align_scores(&scores, 5), None);
    }
}
