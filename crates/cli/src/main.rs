mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use cinevec_core::DEFAULT_SEARCH_LIMIT;

#[derive(Parser)]
#[command(name = "cinevec")]
#[command(about = "Movie catalog with text embeddings in SQLite", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create the movies table and similarity index
    Init,
    /// Print all movies as JSON
    List,
    /// Embed and store a movie (reads CINEVEC_API_KEY)
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
    },
    /// Find movies similar to a text query (reads CINEVEC_API_KEY)
    Search {
        query: String,
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
}

pub(crate) fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("CINEVEC_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinevec")
        .join("movies.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub(crate) fn get_api_key() -> Result<String> {
    std::env::var("CINEVEC_API_KEY")
        .map_err(|_| anyhow::anyhow!("CINEVEC_API_KEY environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Init => commands::movies::run_init()?,
        Commands::List => commands::movies::run_list()?,
        Commands::Add { title, description } => {
            commands::movies::run_add(title, description).await?;
        },
        Commands::Search { query, limit } => commands::movies::run_search(query, limit).await?,
    }

    Ok(())
}
