use crate::identification::core::{init, transition, Effect, Event, State};
use crate::identification::error::FlowError;
use crate::identification::render::Render;
use crate::image_classifier::interface::{ClassificationResult, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::panel::interface::Panel;
use crate::plant_catalog::catalog::PlantCatalog;
use image::{DynamicImage, ImageFormat};
use std::sync::Arc;

/// Decodes JPEG or PNG bytes, sniffing the format from the content.
/// Any other format is unreadable even when `image` could decode it.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, FlowError> {
    let format =
        image::guess_format(bytes).map_err(|e| FlowError::UnreadableImage(e.to_string()))?;
    match format {
        ImageFormat::Jpeg | ImageFormat::Png => image::load_from_memory_with_format(bytes, format)
            .map_err(|e| FlowError::UnreadableImage(e.to_string())),
        other => Err(FlowError::UnreadableImage(format!(
            "{:?} images are not supported, upload a JPEG or PNG",
            other
        ))),
    }
}

/// Upload -> classify -> catalog lookup, one image at a time.
#[derive(Clone)]
pub struct IdentificationFlow {
    catalog: Arc<PlantCatalog>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    render: Render,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl IdentificationFlow {
    pub fn new(
        catalog: Arc<PlantCatalog>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        render: Render,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            image_classifier,
            render,
            logger: logger.with_namespace("identification"),
        }
    }

    pub fn initial_state(&self) -> State {
        init().0
    }

    /// Runs one upload to completion, rendering every intermediate state
    /// into `panel`, and returns the settled state.
    pub fn identify(
        &self,
        state: State,
        image_name: &str,
        bytes: Arc<[u8]>,
        panel: &mut dyn Panel,
    ) -> State {
        let event = Event::ImageUploaded {
            image_name: image_name.to_string(),
            bytes,
        };
        self.dispatch(state, event, panel)
    }

    pub fn reset(&self, state: State, panel: &mut dyn Panel) -> State {
        self.dispatch(state, Event::Reset, panel)
    }

    fn dispatch(&self, state: State, event: Event, panel: &mut dyn Panel) -> State {
        let mut machine = StateMachine::new(
            |state: State, event: Event| {
                let _ = self
                    .logger
                    .info(&format!("event: {}", event.to_display_string()));
                let (new_state, effects) = transition(state, event);
                let effects_display: Vec<String> =
                    effects.iter().map(Effect::to_display_string).collect();
                let _ = self.logger.info(&format!(
                    "new state: {}, effects: {:?}",
                    state_name(&new_state),
                    effects_display
                ));
                (new_state, effects)
            },
            |state: &State| {
                if let Err(e) = self.render.render(state, panel) {
                    let _ = self.logger.error(&format!("render failed: {}", e));
                }
            },
            |effect: Effect| self.run_effect(effect),
        );

        machine.run(state, event)
    }

    fn run_effect(&self, effect: Effect) -> Event {
        match effect {
            Effect::ClassifyImage { bytes } => {
                let result = self.classify(&bytes);
                match &result {
                    Ok(predictions) if predictions.is_empty() => {
                        let _ = self.logger.info("classifier returned no guesses");
                    }
                    Ok(predictions) => {
                        let _ = self
                            .logger
                            .info(&format!("classified {} guesses", predictions.len()));
                    }
                    Err(e) => {
                        let _ = self.logger.error(&e.to_string());
                    }
                }
                Event::ClassifyDone(result)
            }
            Effect::LookupCandidate { candidate } => {
                let plant = self.catalog.lookup_by_name(&candidate);
                if plant.is_none() {
                    let _ = self
                        .logger
                        .info(&format!("{} is not in the library", candidate));
                }
                Event::LookupDone { candidate, plant }
            }
        }
    }

    fn classify(&self, bytes: &[u8]) -> Result<ClassificationResult, FlowError> {
        let image = decode_image(bytes)?;
        self.image_classifier
            .classify(&image)
            .map_err(|e| FlowError::ClassifierFailure(e.to_string()))
    }
}

fn state_name(state: &State) -> &'static str {
    match state {
        State::Idle => "Idle",
        State::ImageReceived { .. } => "ImageReceived",
        State::Classified { .. } => "Classified",
        State::Resolved { .. } => "Resolved",
        State::Failed { .. } => "Failed",
    }
}
