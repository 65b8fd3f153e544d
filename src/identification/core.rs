use crate::identification::error::FlowError;
use crate::image_classifier::interface::ClassificationResult;
use crate::plant_catalog::catalog::PlantMatch;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(PlantMatch),
    NotInLibrary { candidate: String },
    /// The classifier returned no guesses at all.
    NoCandidate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Idle,
    ImageReceived {
        image_name: String,
    },
    Classified {
        image_name: String,
        predictions: ClassificationResult,
    },
    Resolved {
        image_name: String,
        predictions: ClassificationResult,
        resolution: Resolution,
    },
    Failed {
        image_name: String,
        error: FlowError,
    },
}

#[derive(Debug)]
pub enum Event {
    ImageUploaded {
        image_name: String,
        bytes: Arc<[u8]>,
    },
    ClassifyDone(Result<ClassificationResult, FlowError>),
    LookupDone {
        candidate: String,
        plant: Option<PlantMatch>,
    },
    Reset,
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImageUploaded { image_name, bytes } => format!(
                "ImageUploaded {{ image_name: {:?}, bytes: {} }}",
                image_name,
                bytes.len()
            ),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ClassifyImage { bytes: Arc<[u8]> },
    LookupCandidate { candidate: String },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyImage { bytes } => {
                format!("ClassifyImage {{ bytes: {} }}", bytes.len())
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (State::Idle, vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        // A new upload always starts over, whatever was on screen.
        (_, Event::ImageUploaded { image_name, bytes }) => (
            State::ImageReceived { image_name },
            vec![Effect::ClassifyImage { bytes }],
        ),

        (State::ImageReceived { image_name }, Event::ClassifyDone(Ok(predictions))) => {
            match predictions.top().map(|top| top.label.clone()) {
                Some(candidate) => (
                    State::Classified {
                        image_name,
                        predictions,
                    },
                    vec![Effect::LookupCandidate { candidate }],
                ),
                None => (
                    State::Resolved {
                        image_name,
                        predictions,
                        resolution: Resolution::NoCandidate,
                    },
                    vec![],
                ),
            }
        }
        (State::ImageReceived { image_name }, Event::ClassifyDone(Err(error))) => {
            (State::Failed { image_name, error }, vec![])
        }

        (
            State::Classified {
                image_name,
                predictions,
            },
            Event::LookupDone { candidate, plant },
        ) => {
            let resolution = match plant {
                Some(plant) => Resolution::Found(plant),
                None => Resolution::NotInLibrary { candidate },
            };
            (
                State::Resolved {
                    image_name,
                    predictions,
                    resolution,
                },
                vec![],
            )
        }

        (_, Event::Reset) => init(),

        // Stale completions are ignored.
        (state, _) => (state, vec![]),
    }
}
