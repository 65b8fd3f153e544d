use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Identify plants from photos and browse the plant library
#[derive(Parser, Debug)]
#[command(name = "plant-id")]
#[command(version)]
pub struct Cli {
    /// Directory the catalog's plant images are relative to
    #[arg(long, default_value = ".", env = "PLANT_ID_ASSETS")]
    pub assets: PathBuf,

    /// ONNX image classification model; the fake classifier is used when omitted
    #[arg(long, env = "PLANT_ID_MODEL", requires = "labels")]
    pub model: Option<PathBuf>,

    /// Class labels for the model, one per line (ImageNet synset format accepted)
    #[arg(long, env = "PLANT_ID_LABELS")]
    pub labels: Option<PathBuf>,

    /// Side length of the model's square input
    #[arg(long, default_value_t = 224, env = "PLANT_ID_INPUT_SIZE")]
    pub input_size: u32,

    /// The model already outputs probabilities; skip softmax
    #[arg(long, env = "PLANT_ID_PROBABILITIES")]
    pub probabilities: bool,

    /// Number of ranked guesses to show
    #[arg(long, default_value_t = 3, env = "PLANT_ID_TOP_K")]
    pub top_k: usize,

    /// Log timestamps in this fixed UTC offset
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        env = "PLANT_ID_UTC_OFFSET_HOURS"
    )]
    pub utc_offset_hours: i32,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open the window (default)
    Gui,
    /// Classify one image and print the result
    Identify { image: PathBuf },
    /// Print one catalog entry
    Browse {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        plant: Option<String>,
    },
    /// List categories and their plants
    Categories,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["plant-id"]).unwrap();

        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_identify_subcommand() {
        let cli = Cli::try_parse_from(["plant-id", "--top-k", "5", "identify", "leaf.jpg"]).unwrap();

        assert_eq!(cli.top_k, 5);
        assert_eq!(
            cli.command,
            Some(Command::Identify {
                image: PathBuf::from("leaf.jpg")
            })
        );
    }

    #[test]
    fn test_browse_subcommand() {
        let cli = Cli::try_parse_from([
            "plant-id",
            "browse",
            "--category",
            "Medicinal Plants",
            "--plant",
            "Aloe Vera",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Browse {
                category: Some("Medicinal Plants".to_string()),
                plant: Some("Aloe Vera".to_string()),
            })
        );
    }

    #[test]
    fn test_global_flags_have_env_fallbacks() {
        let command = Cli::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().to_string())
        };

        for (id, env) in [
            ("assets", "PLANT_ID_ASSETS"),
            ("model", "PLANT_ID_MODEL"),
            ("labels", "PLANT_ID_LABELS"),
            ("input_size", "PLANT_ID_INPUT_SIZE"),
            ("probabilities", "PLANT_ID_PROBABILITIES"),
            ("top_k", "PLANT_ID_TOP_K"),
            ("utc_offset_hours", "PLANT_ID_UTC_OFFSET_HOURS"),
        ] {
            assert_eq!(env_of(id).as_deref(), Some(env), "{}", id);
        }
    }
}
