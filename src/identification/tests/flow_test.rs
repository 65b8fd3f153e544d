use super::fixture::{encoded_bytes, png_bytes, Fixture};
use crate::identification::core::{Resolution, State};
use crate::identification::error::FlowError;
use crate::identification::render::NOT_IN_LIBRARY_MESSAGE;
use crate::panel::impl_buffer::PanelBuffer;
use image::ImageFormat;
use std::sync::Arc;

#[test]
fn test_thyme_prediction_shows_catalog_record() {
    let f = Fixture::scripted(&[("Thyme", 0.91), ("pot", 0.05), ("daisy", 0.01)]);
    let mut panel = PanelBuffer::new();

    let state = f
        .flow
        .identify(f.flow.initial_state(), "thyme.png", png_bytes(), &mut panel);

    match &state {
        State::Resolved {
            resolution: Resolution::Found(plant),
            ..
        } => {
            assert_eq!(plant.category, "Herbs");
            assert_eq!(plant.record.scientific_name, "Thymus");
        }
        other => panic!("Unexpected state: {:?}", other),
    }
    assert_eq!(
        panel.text(),
        vec![
            "[upload thyme.png] Uploaded Image.",
            "Classifying...",
            "Top Predictions:",
            "1. Thyme: 0.9100",
            "2. pot: 0.0500",
            "3. daisy: 0.0100",
            "## Identified Plant: Thyme",
            "[image img/thyme.png] Thyme",
            "Scientific Name: Thymus",
            "Description: Thyme is used in Moroccan cuisine and as a remedy for respiratory conditions.",
        ]
    );
}

#[test]
fn test_golden_retriever_prediction_falls_back_below_predictions() {
    let f = Fixture::scripted(&[
        ("golden retriever", 0.88),
        ("Labrador retriever", 0.07),
        ("tennis ball", 0.02),
    ]);
    let mut panel = PanelBuffer::new();

    let state = f
        .flow
        .identify(State::Idle, "dog.jpg", png_bytes(), &mut panel);

    assert!(matches!(
        state,
        State::Resolved {
            resolution: Resolution::NotInLibrary { .. },
            ..
        }
    ));

    let text = panel.text();
    let predictions_at = text.iter().position(|l| l == "Top Predictions:").unwrap();
    let fallback_at = text.iter().position(|l| l == NOT_IN_LIBRARY_MESSAGE).unwrap();
    assert!(predictions_at < fallback_at);
    assert_eq!(text[predictions_at + 1], "1. golden retriever: 0.8800");
    assert_eq!(text.last().unwrap(), NOT_IN_LIBRARY_MESSAGE);
    assert!(!panel.contains_text("Scientific Name"));
}

#[test]
fn test_lowercase_label_does_not_match_catalog() {
    let f = Fixture::scripted(&[("mint", 0.6)]);
    let mut panel = PanelBuffer::new();

    f.flow.identify(State::Idle, "mint.jpg", png_bytes(), &mut panel);

    assert!(panel.contains_text(NOT_IN_LIBRARY_MESSAGE));
}

#[test]
fn test_only_top_label_is_used_as_candidate() {
    let f = Fixture::scripted(&[("pot", 0.5), ("Mint", 0.4)]);
    let mut panel = PanelBuffer::new();

    f.flow.identify(State::Idle, "pot.jpg", png_bytes(), &mut panel);

    assert!(panel.contains_text("## Identified Plant: pot"));
    assert!(panel.contains_text(NOT_IN_LIBRARY_MESSAGE));
    assert!(!panel.contains_text("Mentha"));
}

#[test]
fn test_unreadable_image_reports_error_without_predictions() {
    let f = Fixture::scripted(&[("Mint", 0.9)]);
    let mut panel = PanelBuffer::new();
    let bytes: Arc<[u8]> = Arc::from(b"definitely not an image".to_vec());

    let state = f.flow.identify(State::Idle, "notes.txt", bytes, &mut panel);

    assert!(matches!(
        state,
        State::Failed {
            error: FlowError::UnreadableImage(_),
            ..
        }
    ));
    let text = panel.text();
    assert_eq!(text.len(), 1);
    assert!(text[0].starts_with("Error: could not read the uploaded image"));
}

#[test]
fn test_decodable_non_jpeg_png_upload_is_rejected() {
    let f = Fixture::scripted(&[("Mint", 0.9)]);
    let mut panel = PanelBuffer::new();

    let state = f
        .flow
        .identify(State::Idle, "leaf.bmp", encoded_bytes(ImageFormat::Bmp), &mut panel);

    assert!(matches!(
        state,
        State::Failed {
            error: FlowError::UnreadableImage(_),
            ..
        }
    ));
    assert!(!panel.contains_text("## Identified Plant: Mint"));
    assert_eq!(
        panel.text(),
        vec!["Error: could not read the uploaded image: Bmp images are not supported, upload a JPEG or PNG"]
    );
}

#[test]
fn test_jpeg_upload_is_classified() {
    let f = Fixture::scripted(&[("Mint", 0.9)]);
    let mut panel = PanelBuffer::new();

    let state = f
        .flow
        .identify(State::Idle, "leaf.jpg", encoded_bytes(ImageFormat::Jpeg), &mut panel);

    assert!(matches!(state, State::Resolved { .. }));
    assert!(panel.contains_text("## Identified Plant: Mint"));
}

#[test]
fn test_classifier_failure_reports_error_without_touching_catalog() {
    let f = Fixture::failing("model crashed");
    let mut panel = PanelBuffer::new();

    let state = f.flow.identify(State::Idle, "leaf.png", png_bytes(), &mut panel);

    assert_eq!(
        state,
        State::Failed {
            image_name: "leaf.png".to_string(),
            error: FlowError::ClassifierFailure("inference failed: model crashed".to_string()),
        }
    );
    assert_eq!(
        panel.text(),
        vec!["Error: classification failed: inference failed: model crashed"]
    );
}

#[test]
fn test_empty_predictions_show_no_identified_plant() {
    let f = Fixture::scripted(&[]);
    let mut panel = PanelBuffer::new();

    let state = f.flow.identify(State::Idle, "blank.png", png_bytes(), &mut panel);

    assert!(matches!(
        state,
        State::Resolved {
            resolution: Resolution::NoCandidate,
            ..
        }
    ));
    assert_eq!(panel.text().last().unwrap(), "Top Predictions:");
    assert!(!panel.contains_text("Identified Plant"));
}

#[test]
fn test_second_upload_replaces_first_result() {
    let f = Fixture::scripted(&[("Thyme", 0.9)]);
    let mut panel = PanelBuffer::new();

    let state = f.flow.identify(State::Idle, "first.png", png_bytes(), &mut panel);
    let state = f.flow.identify(state, "second.png", png_bytes(), &mut panel);

    assert!(matches!(
        state,
        State::Resolved { ref image_name, .. } if image_name == "second.png"
    ));
    assert!(panel.contains_text("[upload second.png]"));
    assert!(!panel.contains_text("[upload first.png]"));
}

#[test]
fn test_reset_clears_panel() {
    let f = Fixture::scripted(&[("Thyme", 0.9)]);
    let mut panel = PanelBuffer::new();

    let state = f.flow.identify(State::Idle, "leaf.png", png_bytes(), &mut panel);
    let state = f.flow.reset(state, &mut panel);

    assert_eq!(state, State::Idle);
    assert!(panel.items().is_empty());
}

#[test]
fn test_catalog_is_unchanged_by_identification() {
    let f = Fixture::scripted(&[("Mint", 0.9)]);
    let before = f.catalog.lookup_by_name("Mint");
    let mut panel = PanelBuffer::new();

    f.flow.identify(State::Idle, "mint.png", png_bytes(), &mut panel);
    let _ = f.logger.info("identification finished");

    assert_eq!(f.catalog.lookup_by_name("Mint"), before);
    assert!(panel.contains_text("Scientific Name: Mentha"));
}
