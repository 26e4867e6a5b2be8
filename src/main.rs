mod analyzer;
mod app;
mod chart;
mod export;
mod fetch;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::Format;

/// Wordhist — fetch a text document and chart its most frequent words.
///
/// Downloads the document over HTTP, counts every word in a single
/// pass, and shows the top-ranked words as a bar chart or writes them
/// to a CSV/JSON file.
#[derive(Parser)]
#[command(name = "wordhist")]
#[command(version = "0.1.0")]
#[command(about = "Chart the most frequent words of a remote text document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the document and render a word-frequency bar chart
    Analyze {
        /// URL of the text document (defaults to WORDHIST_URL or the built-in document)
        #[arg(value_name = "URL")]
        url: Option<String>,

        /// Number of top-ranked words to keep
        #[arg(long, default_value_t = analyzer::TOP_WORDS)]
        top: usize,
    },

    /// Fetch the document and write the ranked word counts to a file
    Export {
        /// URL of the text document (defaults to WORDHIST_URL or the built-in document)
        #[arg(value_name = "URL")]
        url: Option<String>,

        /// Number of top-ranked words to keep
        #[arg(long, default_value_t = analyzer::TOP_WORDS)]
        top: usize,

        /// Output path (defaults to word_count.csv or word_count.json)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Output encoding
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { url, top } => app::analyze(url.as_deref(), top).await,
        Commands::Export {
            url,
            top,
            output,
            format,
        } => app::export(url.as_deref(), top, output, format).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
