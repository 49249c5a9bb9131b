use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use humansize::{BINARY, format_size};
use pipeline::{SeasonEpisodeMatcher, filter_items, sort_items};
use release_data::{Candidate, MediaRequest, Token, TokenKind, load_run_inputs};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// release-filter - Release search result filtering
#[derive(Parser)]
#[command(name = "release-filter")]
#[command(about = "Filter and rank release search results for a movie or an episode", long_about = None)]
struct Cli {
    /// Path to a JSON filter configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort a list of search results
    Filter {
        /// JSON file holding an array of candidates
        #[arg(long)]
        candidates: PathBuf,

        /// Season number (makes this a series request, needs --episode)
        #[arg(long, requires = "episode")]
        season: Option<u32>,

        /// Episode number (needs --season)
        #[arg(long, requires = "season")]
        episode: Option<u32>,

        /// Sort mode: quality, sizeasc, sizedesc or qualitythensize.
        /// Overrides the configuration file.
        #[arg(long)]
        sort: Option<String>,

        /// Maximum number of results to print
        #[arg(long)]
        limit: Option<usize>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a release title matches a season and episode
    Check {
        /// Release title, e.g. Show.S02E05.1080p.WEB
        #[arg(long)]
        title: String,

        /// Season token, e.g. S02
        #[arg(long)]
        season: String,

        /// Episode token, e.g. E05
        #[arg(long)]
        episode: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            candidates,
            season,
            episode,
            sort,
            limit,
            json,
        } => handle_filter(cli.config, candidates, season.zip(episode), sort, limit, json)?,
        Commands::Check {
            title,
            season,
            episode,
        } => handle_check(&title, &season, &episode)?,
    }

    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(
    config_path: Option<PathBuf>,
    candidates_path: PathBuf,
    episode: Option<(u32, u32)>,
    sort: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let (candidates, mut config) = load_run_inputs(&candidates_path, config_path.as_deref())
        .context("Failed to load filter inputs")?;

    if sort.is_some() {
        config.sort = sort;
    }

    let request = match episode {
        Some((season, episode)) => MediaRequest::series_numbered(season, episode),
        None => MediaRequest::Movie,
    };
    tracing::info!(
        "Filtering {} candidates for a {} request, sort mode {}",
        candidates.len(),
        request.media_type(),
        config.sort_mode()
    );

    let start = Instant::now();
    let filtered = filter_items(&candidates, &request, &config)
        .context("Failed to filter candidates")?;
    let sorted = sort_items(&filtered, &config);
    let elapsed = start.elapsed();

    let shown = &sorted[..limit.unwrap_or(sorted.len()).min(sorted.len())];
    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        print_candidates(shown, candidates.len(), sorted.len(), elapsed);
    }
    Ok(())
}

/// Handle the 'check' command
fn handle_check(title: &str, season: &str, episode: &str) -> Result<()> {
    let season = Token::parse(TokenKind::Season, season).context("Invalid season")?;
    let episode = Token::parse(TokenKind::Episode, episode).context("Invalid episode")?;

    let matcher = SeasonEpisodeMatcher::new(season.clone(), episode.clone());
    if matcher.matches(title)? {
        println!("{} {} may contain {}{}", "✓".green(), title, season, episode);
    } else {
        println!("{} {} does not contain {}{}", "✗".red(), title, season, episode);
    }
    Ok(())
}

/// Helper function to format and print the surviving candidates
fn print_candidates(candidates: &[Candidate], total: usize, kept: usize, elapsed: Duration) {
    println!(
        "{}",
        format!("Kept {} of {} results in {:?}:", kept, total, elapsed)
            .bold()
            .blue()
    );

    for (index, candidate) in candidates.iter().enumerate() {
        let quality = candidate.quality.as_deref().unwrap_or("unknown");
        let languages = if candidate.languages.is_empty() {
            String::new()
        } else {
            format!(" [{}]", candidate.languages.join(", "))
        };
        println!(
            "{}. {} ({}, {}){}",
            (index + 1).to_string().green(),
            candidate.title,
            quality.yellow(),
            format_size(candidate.size, BINARY),
            languages
        );
    }
}
