use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use catalog::MovieRecord;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use interpreter::{expand_query, HfClassifier, InferenceConfig, SemanticInterpreter};
use search::{
    SearchConfig, SearchOrchestrator, SearchOutcome, SearchSession, ENV_CATALOG_KEY,
    ENV_CATALOG_URL, ENV_INFERENCE_KEY, ENV_INFERENCE_URL,
};
use tracing::info;

/// ReelSearch - natural-language movie search
#[derive(Parser)]
#[command(name = "reel-search")]
#[command(about = "Find movies from a free-text description", long_about = None)]
struct Cli {
    #[command(flatten)]
    credentials: Credentials,

    #[command(subcommand)]
    command: Commands,
}

/// Flags override the matching environment variables
#[derive(Args)]
struct Credentials {
    /// Movie catalog API key (required for `search`) [env: TMDB_API_KEY]
    #[arg(long, global = true)]
    tmdb_key: Option<String>,

    /// Inference API key; label classification is disabled without it [env: HF_API_KEY]
    #[arg(long, global = true)]
    hf_key: Option<String>,

    /// Movie catalog API root [env: TMDB_BASE_URL]
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    /// Sentence-similarity model endpoint [env: HF_INFERENCE_URL]
    #[arg(long, global = true)]
    inference_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog for movies matching a description
    Search {
        /// What you feel like watching, e.g. "funny movies about space"
        query: String,

        /// Print the result records as JSON
        #[arg(long)]
        json: bool,

        /// Skip label classification and use concept expansion only
        #[arg(long)]
        no_semantic: bool,
    },

    /// Show how a query is interpreted, without searching
    Expand {
        /// Query to interpret
        query: String,
    },
}

impl Credentials {
    /// Flag value for a configuration variable, else the environment
    fn lookup(&self, name: &str) -> Option<String> {
        let flag = match name {
            ENV_CATALOG_KEY => &self.tmdb_key,
            ENV_INFERENCE_KEY => &self.hf_key,
            ENV_CATALOG_URL => &self.catalog_url,
            ENV_INFERENCE_URL => &self.inference_url,
            _ => &None,
        };
        flag.clone().or_else(|| std::env::var(name).ok())
    }

    fn search_config(&self, semantic: bool) -> Result<SearchConfig> {
        let mut config = SearchConfig::from_lookup(|name| self.lookup(name))
            .context("A catalog API key is required: pass --tmdb-key or set TMDB_API_KEY")?;
        if !semantic {
            config.inference = None;
        }
        Ok(config)
    }

    fn inference(&self) -> Option<InferenceConfig> {
        SearchConfig::inference_from_lookup(&|name: &str| self.lookup(name))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            query,
            json,
            no_semantic,
        } => handle_search(&cli.credentials, query, json, !no_semantic).await?,
        Commands::Expand { query } => handle_expand(&cli.credentials, &query).await?,
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    credentials: &Credentials,
    query: String,
    json: bool,
    semantic: bool,
) -> Result<()> {
    let config = credentials.search_config(semantic)?;
    let orchestrator =
        SearchOrchestrator::from_config(&config).context("Failed to set up search")?;

    let mut session = SearchSession::new(orchestrator);
    session.set_query(query);

    let start = Instant::now();
    let outcome = session.handle_search().await;
    info!("Search finished in {:?}", start.elapsed());

    if json {
        println!("{}", serde_json::to_string_pretty(session.movies())?);
        if let Some(message) = session.error() {
            eprintln!("{message}");
        }
    } else {
        match outcome {
            SearchOutcome::Skipped => println!("{}", "Nothing to search for.".yellow()),
            SearchOutcome::Found(_) => print_movies(session.query(), session.movies()),
            SearchOutcome::Empty | SearchOutcome::Failed => {
                if let Some(message) = session.error() {
                    println!("{}", message.yellow());
                }
            }
        }
    }

    if outcome == SearchOutcome::Failed {
        bail!("Search for {:?} failed", session.query());
    }
    Ok(())
}

/// Handle the 'expand' command
async fn handle_expand(credentials: &Credentials, query: &str) -> Result<()> {
    println!("{} {}", "Expanded:".bold(), expand_query(query));

    let Some(inference) = credentials.inference() else {
        println!(
            "{}",
            "No inference key, label classification skipped".dimmed()
        );
        return Ok(());
    };

    let classifier =
        HfClassifier::new(inference).context("Failed to create inference client")?;
    let interpreter = SemanticInterpreter::new(Arc::new(classifier));
    println!(
        "{} {}",
        "Interpreted:".bold(),
        interpreter.interpret(query).await
    );
    Ok(())
}

/// Helper function to format and print search results
fn print_movies(query: &str, movies: &[MovieRecord]) {
    println!(
        "{}",
        format!("Results for \"{}\" ({} movies):", query, movies.len())
            .bold()
            .blue()
    );

    for (i, movie) in movies.iter().enumerate() {
        let rank = i + 1;
        println!(
            "{}. {} ({}) - Rating: {}",
            rank.to_string().green(),
            movie.title.bold(),
            movie.release_year().unwrap_or("????"),
            movie.rating_label()
        );
        if let Some(url) = movie.poster_url() {
            println!("   {}", url.dimmed());
        }
        println!("   {}", movie.overview_or_placeholder());
    }
}
