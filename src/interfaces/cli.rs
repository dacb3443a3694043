use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ctrans")]
#[command(about = "Translate source code between languages with a local LLM.")]
#[command(version)]
pub struct Cli {
    /// Source language (defaults to config)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language (defaults to config)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Read source code from a file ("-" for stdin)
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Override the configured model
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Start an interactive session
    #[arg(long, conflicts_with = "serve")]
    pub repl: bool,

    /// Serve the web form
    #[arg(long)]
    pub serve: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Source code
    #[arg(num_args = 1..)]
    pub code: Vec<String>,
}
