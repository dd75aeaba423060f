//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Copydesk - generate marketing copy and keep its history in a Google Sheet
#[derive(Parser)]
#[command(name = "copydesk")]
#[command(about = "Generate marketing copy variants and keep a shared history", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Write logs to this file (the studio always logs to a file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Tuning file overriding the bundled copydesk.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive terminal studio
    Studio,

    /// Generate variants for one brief and append them to history
    Generate(GenerateArgs),

    /// Show the most recent history rows
    History {
        /// Number of rows to show (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print full records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Verify credentials and sheet access
    CheckSheet {
        /// Append a diagnostic row after the checks pass
        #[arg(long)]
        append_test_row: bool,
    },
}

/// Brief for the `generate` command.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Topic, offer or idea
    #[arg(short, long)]
    pub topic: String,

    /// Content type: Ad Copy, Instagram Caption, LinkedIn Post, Blog Intro,
    /// Email Promo, Product Description or YouTube Description
    #[arg(long, default_value = "Ad Copy")]
    pub content_type: String,

    /// Tone: Professional, Friendly, Bold, Funny, Motivational or Persuasive
    #[arg(long, default_value = "Professional")]
    pub tone: String,

    /// Approximate length in words (defaults to the configured length)
    #[arg(long)]
    pub length: Option<u32>,

    /// Template preset: Real-Estate, E-commerce, Fitness, Travel, SaaS or
    /// Coaching; unknown names mean no preset
    #[arg(long)]
    pub template: Option<String>,

    /// Extra instructions appended to the prompt
    #[arg(long, default_value = "")]
    pub extra: String,

    /// Model identifier (defaults to the first configured model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Sampling temperature (defaults to the configured temperature)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Number of variants, 1 to 3
    #[arg(short = 'n', long, default_value_t = 1)]
    pub variants: u8,

    /// Also write each variant to the export directory
    #[arg(long)]
    pub export: bool,
}
