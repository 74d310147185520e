//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::settings::parse_base_url;
use crate::domain::{AppError, Settings, format_prompt_preview};

#[derive(Parser)]
#[command(name = "dapgen")]
#[command(version)]
#[command(
    about = "Generate a data-architecture principle document with NeMo Data Designer",
    long_about = None
)]
struct Cli {
    /// Principle topic [env: PRINCIPLE_TOPIC, default: "Data Integration"]
    #[arg(short, long)]
    topic: Option<String>,
    /// Directory receiving the document [env: PRINCIPLE_OUTPUT_DIR, default: output]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Model alias for generated sections [env: MODEL_ALIAS]
    #[arg(short, long)]
    model_alias: Option<String>,
    /// Data Designer base URL [env: NEMO_DD_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,
    /// Print the prompts with the topic filled in and exit without calling the service
    #[arg(long)]
    prompt_preview: bool,
}

impl Cli {
    /// Layer explicit flags over environment-derived settings.
    fn apply_overrides(&self, mut settings: Settings) -> Result<Settings, AppError> {
        if let Some(topic) = &self.topic {
            settings.topic = topic.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            settings.output_dir = output_dir.clone();
        }
        if let Some(model_alias) = &self.model_alias {
            settings.model_alias = model_alias.clone();
        }
        if let Some(base_url) = &self.base_url {
            settings.base_url = parse_base_url(base_url)?;
        }
        Ok(settings)
    }
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init();
    let cli = Cli::parse();

    if let Err(e) = execute(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<(), AppError> {
    let settings = cli.apply_overrides(Settings::from_env()?)?;
    tracing::debug!(?settings, "Resolved settings");

    if cli.prompt_preview {
        let previews = crate::prompt_preview(&settings)?;
        print!("{}", format_prompt_preview(&settings.topic, &previews));
        return Ok(());
    }

    let outcome = crate::generate(&settings)?;
    println!("✅ Generated principle written to {}", outcome.path.display());
    println!();
    println!("{}", outcome.document);
    Ok(())
}
