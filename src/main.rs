use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use minuteman::{
    ExtractionDocument, OllamaClient, OllamaConfig, Session, SortOrder, ViewOptions,
    assignee_options, build_extraction_prompt, extract_action_items, project,
    read_transcript_file, render_grouped,
};

#[derive(Parser)]
#[command(name = "minuteman")]
#[command(author, version, about = "Extract action items from meeting transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract action items from a transcript and print the grouped result
    Extract {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Model to use (must be available on the Ollama server)
        #[arg(long, default_value = "llama3")]
        model: String,

        /// Base URL of the Ollama server (overrides OLLAMA_HOST)
        #[arg(long)]
        base_url: Option<String>,

        /// Only show items for this assignee ("all" shows everyone)
        #[arg(long, default_value = "all")]
        filter_assignee: String,

        /// Sort order for the displayed items
        #[arg(long, value_enum, default_value_t = SortOrder::Default)]
        sort: SortOrder,

        /// Also write the extracted items as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the rendered extraction prompt without calling the backend
    Prompt {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            model,
            base_url,
            filter_assignee,
            sort,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            run_extract(input, model, base_url, filter_assignee, sort, json).await
        }
        Commands::Prompt { input } => {
            setup_logging(false);
            let transcript = read_transcript_file(&input)?;
            print!("{}", build_extraction_prompt(&transcript));
            Ok(())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn run_extract(
    input: PathBuf,
    model: String,
    base_url: Option<String>,
    filter_assignee: String,
    sort: SortOrder,
    json: Option<PathBuf>,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_transcript_file(&input)?;

    let mut config = OllamaConfig::from_env().with_model(model);
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }

    info!("Using model {} at {}", config.model, config.base_url);
    let client = OllamaClient::new(config);

    let raw = extract_action_items(&client, &client.config().model, &transcript).await?;
    if raw.is_empty() {
        info!("No action items found");
    }

    let mut session = Session::new();
    session.replace(raw);

    let options = ViewOptions {
        sort_order: sort,
        ..Default::default()
    }
    .with_filter(&filter_assignee);

    let view = project(session.items(), &options);
    print!("{}", render_grouped(&view));

    let assignees = assignee_options(session.items());
    info!(
        "{} items across {} assignees",
        session.items().len(),
        assignees.len().saturating_sub(1)
    );

    if let Some(path) = json {
        ExtractionDocument::new(session.items()).write_json(&path)?;
        info!("JSON output written to {:?}", path);
    }

    Ok(())
}
