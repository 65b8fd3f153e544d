use crate::cli::Cli;
use crate::error::AppError;
use crate::image_classifier::models::model_config::ModelConfig;
use chrono::{FixedOffset, Offset, Utc};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: FixedOffset,
    /// Base directory the catalog's image paths are relative to.
    pub assets_dir: PathBuf,
    pub top_k: usize,
    pub confidence_precision: usize,
    /// `None` runs the fake classifier.
    pub model: Option<ModelConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: utc(),
            assets_dir: PathBuf::from("."),
            top_k: 3,
            confidence_precision: 4,
            model: None,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let logger_timezone = cli
            .utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "UTC offset {} hours is out of range",
                    cli.utc_offset_hours
                ))
            })?;

        if cli.top_k == 0 {
            return Err(AppError::Config("--top-k must be at least 1".to_string()));
        }
        if cli.input_size == 0 {
            return Err(AppError::Config("--input-size must be at least 1".to_string()));
        }

        let model = match (&cli.model, &cli.labels) {
            (Some(model), Some(labels)) => {
                let mut model_config = ModelConfig::imagenet(model.clone(), labels.clone());
                model_config.input_shape = (cli.input_size, cli.input_size);
                model_config.apply_softmax = !cli.probabilities;
                Some(model_config)
            }
            (Some(_), None) => {
                return Err(AppError::Config("--model requires --labels".to_string()));
            }
            (None, _) => None,
        };

        Ok(Self {
            logger_timezone,
            assets_dir: cli.assets.clone(),
            top_k: cli.top_k,
            model,
            ..Self::default()
        })
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}
