use crate::config::settings::Settings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "read-time")]
#[command(about = "Estimate the reading time of structured content")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON content document; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the configured reading speed
    #[arg(long)]
    pub words_per_minute: Option<f64>,

    /// Round up to whole minutes instead of showing seconds
    #[arg(long)]
    pub hide_seconds: bool,

    /// Treat the input as a raw value instead of a content document
    #[arg(long)]
    pub filter: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command line flags win over the settings file.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(words_per_minute) = self.words_per_minute {
            settings.reading.words_per_minute = words_per_minute;
        }
        if self.hide_seconds {
            settings.reading.show_seconds = false;
        }
    }
}
