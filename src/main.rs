use anyhow::Context;
use clap::{Parser, Subcommand};
use ontofind::catalog::{load_catalog, render_tsv, MatchRecord};
use ontofind::config::Config;
use ontofind::{sort_matches, EntityFinder};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ontofind", about = "Find ontology terms by label and synonym")]
struct Cli {
    /// Config file to use instead of ~/.config/ontofind/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a term catalog for entities matching a phrase.
    Search {
        /// JSON term catalog to index.
        catalog: PathBuf,
        /// Words of the search phrase.
        #[arg(required = true)]
        query: Vec<String>,
        /// Print matches as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Print index statistics for a term catalog.
    Stats {
        /// JSON term catalog to index.
        catalog: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ontofind debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    let prefixes = config.prefixes();

    match cli.command {
        Command::Search {
            catalog,
            query,
            json,
        } => {
            let ontology = load_catalog(&catalog, &prefixes)?;
            let mut finder = EntityFinder::with_label_properties(config.label_properties()?);
            finder.add_ontology_entities(&ontology);

            let query = query.join(" ");
            let mut matches = finder.find_entities(&query);
            sort_matches(&mut matches);
            let records: Vec<MatchRecord> = matches
                .iter()
                .map(|m| MatchRecord::from_match(m, config.output.show_obo_ids))
                .collect();
            tracing::debug!(query = %query, hits = records.len(), "search complete");

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", render_tsv(&records));
            }
        }
        Command::Stats { catalog } => {
            let ontology = load_catalog(&catalog, &prefixes)?;
            let mut finder = EntityFinder::with_label_properties(config.label_properties()?);
            let stats = finder.add_ontology_entities(&ontology);
            let index = finder.index();

            println!("entities        {}", stats.entities_seen);
            println!("values indexed  {}", stats.values_indexed);
            println!("values skipped  {}", stats.values_skipped);
            println!("exact keys      {}", index.exact_key_count());
            println!("sub-phrase keys {}", index.sub_key_count());
            println!("max term size   {}", finder.max_term_size());
        }
    }

    Ok(())
}
