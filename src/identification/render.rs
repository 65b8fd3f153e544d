use crate::identification::core::{Resolution, State};
use crate::image_classifier::interface::ClassificationResult;
use crate::panel::interface::{ImageRef, Panel};
use crate::plant_catalog::render::render_record;
use std::error::Error;

pub const NOT_IN_LIBRARY_MESSAGE: &str =
    "Information about this plant is not available in the library.";

#[derive(Debug, Clone)]
pub struct Render {
    confidence_precision: usize,
}

impl Render {
    pub fn new(confidence_precision: usize) -> Self {
        Self {
            confidence_precision,
        }
    }

    pub fn render(
        &self,
        state: &State,
        panel: &mut dyn Panel,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        panel.clear()?;

        match state {
            State::Idle => {}
            State::ImageReceived { image_name } => {
                self.render_upload(panel, image_name)?;
            }
            State::Classified {
                image_name,
                predictions,
            } => {
                self.render_upload(panel, image_name)?;
                self.render_predictions(panel, predictions)?;
            }
            State::Resolved {
                image_name,
                predictions,
                resolution,
            } => {
                self.render_upload(panel, image_name)?;
                self.render_predictions(panel, predictions)?;

                match resolution {
                    Resolution::Found(plant) => {
                        panel.write_heading(&format!("Identified Plant: {}", plant.name))?;
                        render_record(panel, &plant.name, &plant.record)?;
                    }
                    Resolution::NotInLibrary { candidate } => {
                        panel.write_heading(&format!("Identified Plant: {}", candidate))?;
                        panel.write_line(NOT_IN_LIBRARY_MESSAGE)?;
                    }
                    Resolution::NoCandidate => {}
                }
            }
            State::Failed { error, .. } => {
                panel.write_line(&format!("Error: {}", error))?;
            }
        }

        Ok(())
    }

    fn render_upload(
        &self,
        panel: &mut dyn Panel,
        image_name: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        panel.show_image(ImageRef::Upload(image_name.to_string()), "Uploaded Image.")?;
        panel.write_line("Classifying...")?;
        Ok(())
    }

    fn render_predictions(
        &self,
        panel: &mut dyn Panel,
        predictions: &ClassificationResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        panel.write_line("Top Predictions:")?;
        for (rank, classification) in predictions.iter().enumerate() {
            panel.write_line(&format!(
                "{}. {}: {:.*}",
                rank + 1,
                classification.label,
                self.confidence_precision,
                classification.confidence
            ))?;
        }
        Ok(())
    }
}
