use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use fuse::config::Config;
use fuse::frequency::stopwords::StopWordOracle;
use fuse::frequency::table::FrequencyTable;
use fuse::frequency::traits::FrequencyOracle;
use fuse::relation::discover::{Concept, RelationFinder};
use fuse::relation::sections;
use fuse::resolver::{prompt_concept, ConceptResolver};
use fuse::text::normalize::normalize;
use fuse::text::profile::Profiler;
use fuse::wikipedia::client::WikipediaClient;

/// Fuse: discover the concept that bridges two others.
///
/// Reads the Wikipedia article for each concept, finds the rare word both
/// articles lean on most, and shows which section of each article uses it.
#[derive(Parser)]
#[command(name = "fuse", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the word connecting two concepts (prompts for any not given)
    Relate {
        /// First concept (e.g. "Gulf Stream")
        concept1: Option<String>,

        /// Second concept (e.g. "Climate of Europe")
        concept2: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most distinctive words of a concept's article
    Profile {
        /// The concept to profile
        concept: String,

        /// How many words to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Show how often a word appears in each section of a concept's article
    Sections {
        /// The concept whose article to inspect
        concept: String,

        /// The word to look for
        word: String,
    },

    /// Download the word frequency list for the configured language
    DownloadWordlist,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `relate --json` output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fuse=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Relate {
            concept1,
            concept2,
            json,
        } => {
            let oracle = load_oracle(&config)?;
            let client = wikipedia_client(&config)?;

            let first = resolve_concept(&client, &config, 1, concept1.as_deref()).await?;
            let second = resolve_concept(&client, &config, 2, concept2.as_deref()).await?;

            let finder = RelationFinder::new(oracle.as_ref(), config.profile);
            let result = finder.discover(&first, &second)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                fuse::output::terminal::display_relation(&result);
            }
        }

        Commands::Profile { concept, top } => {
            let oracle = load_oracle(&config)?;
            let client = wikipedia_client(&config)?;
            let concept = resolve_concept(&client, &config, 1, Some(concept.as_str())).await?;

            let profiler = Profiler::new(oracle.as_ref(), config.profile);
            let profile = profiler.profile(&concept.document.content);
            let words = profiler.distinctive_words(&profile, top);

            fuse::output::terminal::display_profile(&concept.document.title, profile.len(), &words);
        }

        Commands::Sections { concept, word } => {
            let oracle = load_oracle(&config)?;
            let client = wikipedia_client(&config)?;
            let concept = resolve_concept(&client, &config, 1, Some(concept.as_str())).await?;

            // Normalize the word the same way article text is
            let word = normalize(&word).concat();
            let profiler = Profiler::new(oracle.as_ref(), config.profile);
            if !profiler.qualifies(&word) {
                println!(
                    "{}",
                    format!("\"{word}\" is too short or too common to ever be profiled.").yellow()
                );
            }

            let frequencies = sections::section_frequencies(&profiler, &word, &concept.document);
            let best = sections::best_of(frequencies.clone());

            fuse::output::terminal::display_section_frequencies(
                &concept.document,
                &word,
                &frequencies,
                best.as_ref(),
            );
        }

        Commands::DownloadWordlist => {
            println!(
                "Downloading word list for language \"{}\"...",
                config.language
            );
            println!("  Destination: {}", config.wordlist_path.display());

            let downloaded =
                fuse::frequency::download::download_wordlist(&config.language, &config.wordlist_path)
                    .await?;

            // Parse it once so a bad download is caught now rather than mid-query
            let table = FrequencyTable::load(&config.language, &config.wordlist_path)?;

            if downloaded {
                println!("\n{}", "Word list downloaded.".bold());
            } else {
                println!("\n{}", "Word list already installed.".bold());
            }
            println!("  {} words", table.len());
        }
    }

    Ok(())
}

/// Pick the frequency oracle: the word list if installed, stop words otherwise.
fn load_oracle(config: &Config) -> Result<Box<dyn FrequencyOracle>> {
    let oracle: Box<dyn FrequencyOracle> = if config.wordlist_present() {
        Box::new(FrequencyTable::load(&config.language, &config.wordlist_path)?)
    } else {
        warn!(
            path = %config.wordlist_path.display(),
            "Word list not installed, falling back to stop words"
        );
        eprintln!(
            "{}",
            "Tip: Run `fuse download-wordlist` for better results than the stop-word fallback."
                .dimmed()
        );
        Box::new(StopWordOracle::new(&config.language)?)
    };

    info!(language = oracle.language(), "Frequency oracle ready");
    Ok(oracle)
}

fn wikipedia_client(config: &Config) -> Result<WikipediaClient> {
    info!(api = %config.wiki_api_url, language = %config.language, "Using Wikipedia");
    WikipediaClient::new(
        &config.wiki_api_url,
        config.wiki_requests_per_second,
        config.auto_suggest,
    )
}

/// Resolve a concept from the command line or an interactive prompt.
///
/// Prompts and disambiguation lists go to stderr so stdout carries only the
/// result (which may be JSON).
async fn resolve_concept(
    resolver: &dyn ConceptResolver,
    config: &Config,
    index: usize,
    initial: Option<&str>,
) -> Result<Concept> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stderr();
    prompt_concept(
        resolver,
        index,
        initial,
        &mut input,
        &mut output,
        config.max_attempts,
    )
    .await
}
