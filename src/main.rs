//! Robots-Probe main entry point
//!
//! This is the command-line interface for the Robots-Probe robots.txt inspector.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use robots_probe::config::{load_config, Config};
use robots_probe::fetch::build_http_client;
use robots_probe::output::{
    print_allowed, print_disallowed, print_sitemaps, print_summary, verdict_line,
    write_markdown_report, QueryVerdict,
};
use robots_probe::robots::{RobotsCache, RobotsFile};
use robots_probe::Source;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Robots-Probe: a small robots.txt inspector
///
/// Fetches one or more robots.txt files, lists their rules and sitemaps,
/// and answers whether a user agent may crawl given paths.
#[derive(Parser, Debug)]
#[command(name = "robots-probe")]
#[command(version)]
#[command(about = "Inspect robots.txt rules and check crawl permissions", long_about = None)]
struct Cli {
    /// Site URL, robots.txt URL, or local robots.txt file
    #[arg(value_name = "SOURCE", required = true)]
    sources: Vec<String>,

    /// User agent name to evaluate rules for
    #[arg(short, long, default_value = "*")]
    agent: String,

    /// Path to check (repeatable)
    #[arg(short, long = "path", value_name = "PATH")]
    paths: Vec<String>,

    /// Sections to print for each source (repeatable, defaults to summary)
    #[arg(long, value_enum)]
    show: Vec<Section>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a markdown report (single source only)
    #[arg(long, value_name = "FILE")]
    markdown: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// A listing printed for each source
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    Summary,
    Allowed,
    Disallowed,
    Sitemaps,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if cli.markdown.is_some() && cli.sources.len() > 1 {
        bail!("--markdown can only be used with a single source");
    }

    let (sources, mut failures) = collect_sources(&cli.sources);

    let sections = if cli.show.is_empty() {
        vec![Section::Summary]
    } else {
        cli.show.clone()
    };

    let client = build_http_client(&config).context("Failed to build HTTP client")?;
    let cache = Arc::new(RobotsCache::new(config.fetch.cache_ttl_hours));

    // Fetch every source concurrently, report in argument order
    let handles: Vec<_> = sources
        .iter()
        .cloned()
        .map(|source| {
            let client = client.clone();
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get_or_fetch(&client, &source).await })
        })
        .collect();

    for (source, handle) in sources.iter().zip(handles) {
        match handle.await? {
            Ok(robots) => report(&cli, &sections, source, &robots)?,
            Err(e) => {
                tracing::error!("Failed to load robots.txt from {}: {}", source, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} sources could not be loaded",
            failures,
            cli.sources.len()
        );
    }

    Ok(())
}

/// Parses source arguments, dropping duplicates
///
/// Invalid arguments are logged and counted instead of aborting the run.
fn collect_sources(args: &[String]) -> (Vec<Source>, usize) {
    let mut sources: Vec<Source> = Vec::with_capacity(args.len());
    let mut invalid = 0usize;

    for arg in args {
        match Source::parse(arg) {
            Ok(source) if !sources.contains(&source) => sources.push(source),
            Ok(_) => tracing::debug!("Skipping duplicate source {}", arg),
            Err(e) => {
                tracing::error!("Skipping source {}: {}", arg, e);
                invalid += 1;
            }
        }
    }

    (sources, invalid)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robots_probe=info,warn"),
            1 => EnvFilter::new("robots_probe=debug,info"),
            2 => EnvFilter::new("robots_probe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the requested sections and query verdicts for one source
fn report(
    cli: &Cli,
    sections: &[Section],
    source: &Source,
    robots: &RobotsFile,
) -> anyhow::Result<()> {
    println!("=== {} ===", source);

    for section in sections {
        match section {
            Section::Summary => {
                println!("Rule groups:");
                print_summary(robots);
            }
            Section::Allowed => {
                println!("Allowed for {}:", cli.agent);
                print_allowed(robots, &cli.agent);
            }
            Section::Disallowed => {
                println!("Disallowed for {}:", cli.agent);
                print_disallowed(robots, &cli.agent);
            }
            Section::Sitemaps => {
                println!("Sitemaps:");
                print_sitemaps(robots);
            }
        }
    }

    let verdicts: Vec<QueryVerdict> = cli
        .paths
        .iter()
        .map(|path| QueryVerdict::evaluate(robots, &cli.agent, path))
        .collect();

    if !verdicts.is_empty() {
        println!("Queries:");
        for verdict in &verdicts {
            println!("  {}", verdict_line(verdict));
        }
    }
    println!();

    if let Some(path) = &cli.markdown {
        write_markdown_report(&source.to_string(), robots, &verdicts, path)
            .with_context(|| format!("Failed to write markdown report {}", path.display()))?;
    }

    Ok(())
}
