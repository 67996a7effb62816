mod echo;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use similis_core::{Document, FetchConfig, SimilarityMatcher, fetch_source};

use crate::echo::{format_size, print_banner, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Locate elements in a revised page that resemble a reference element
#[derive(Parser, Debug)]
#[command(name = "similis")]
#[command(author = "Similis Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Locate elements similar to a reference element across HTML page revisions", long_about = None)]
struct Args {
    /// Original document: URL or local HTML file
    #[arg(value_name = "ORIGINAL")]
    original: String,

    /// Revised document: URL or local HTML file
    #[arg(value_name = "DIFF")]
    diff: String,

    /// id of the reference element in the original document
    #[arg(value_name = "ELEMENT_ID")]
    element_id: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // Missing positionals print usage and exit cleanly, matching the
        // tool's long-standing behavior.
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            err.print()?;
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let config = FetchConfig {
        timeout: args.timeout,
        user_agent: args
            .user_agent
            .unwrap_or_else(|| "Mozilla/5.0 (compatible; Similis/1.0)".to_string()),
    };

    if args.verbose {
        print_step(1, 3, &format!("Loading original document {}", args.original.bright_white()));
    }

    let original_html = fetch_source(&args.original, &config)
        .await
        .with_context(|| format!("Failed to load original document: {}", args.original))?;
    let original = Document::parse(&original_html).context("Failed to parse original document")?;

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(original_html.len()).bright_white());
        eprintln!();
        print_step(2, 3, &format!("Loading diff document {}", args.diff.bright_white()));
    }

    let diff_html = fetch_source(&args.diff, &config)
        .await
        .with_context(|| format!("Failed to load diff document: {}", args.diff))?;
    let diff = Document::parse(&diff_html).context("Failed to parse diff document")?;

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(diff_html.len()).bright_white());
        eprintln!();
        print_step(3, 3, &format!("Scoring candidates for #{}", args.element_id));
    }

    let matcher = SimilarityMatcher::new();
    let paths = matcher
        .find_similar_elements(&original, &diff, &args.element_id)
        .context("Failed to locate similar elements")?;

    if args.verbose {
        print_success(&format!("{} element(s) retained", paths.len()));
        eprintln!();
    }

    if paths.is_empty() {
        println!("No elements similar to {} found", args.element_id);
    } else {
        for path in &paths {
            println!("Result element - {}", path);
        }
    }

    Ok(())
}
