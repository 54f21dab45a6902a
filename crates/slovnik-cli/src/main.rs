use std::process::ExitCode;

use clap::Parser;
use slovnik_config::Config;
use slovnik_core::error::ExtractError;
use slovnik_core::extract::Extractor;
use slovnik_core::highlight::Highlighter;
use slovnik_core::markup::Document;
use slovnik_fetch::SlovnikClient;
use slovnik_render::{render, render_empty};
use tracing_subscriber::EnvFilter;

/// Look up a word in the seznam.cz bilingual dictionary
#[derive(Parser)]
#[command(name = "slovnik", version, about)]
struct Args {
    /// Word to lookup
    query: String,

    /// Source language
    #[arg(short, long, default_value = "cz", value_parser = ["cz", "en"])]
    source: String,

    /// Target language
    #[arg(short, long, default_value = "en", value_parser = ["cz", "en"])]
    target: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Checked before any I/O: the site only serves cz<->something pairs.
    if !valid_language_pair(&args.source, &args.target) {
        eprintln!("Either source or target must be \"cz\"");
        return ExitCode::FAILURE;
    }

    let config = Config::new();

    let highlighter = match Highlighter::new(&config.highlight) {
        Ok(highlighter) => highlighter,
        Err(err) => {
            eprintln!("Invalid abbreviation set: {err}");
            return ExitCode::FAILURE;
        }
    };

    let html = match SlovnikClient::new(&config.network)
        .and_then(|client| client.fetch_page(&args.source, &args.target, &args.query))
    {
        Ok(html) => html,
        Err(err) => {
            eprintln!("Failed to get html: {err}");
            return ExitCode::FAILURE;
        }
    };

    let width = terminal_width();
    let color = !args.no_color && atty::is(atty::Stream::Stdout);
    let doc = Document::parse(&html);

    match Extractor::new(&highlighter).extract(&doc) {
        Ok(result) => print!("{}", render(&result, width, color)),
        Err(ExtractError::EmptyResult { title }) => {
            tracing::info!(query = %args.query, "no definitions extracted");
            let title = if title.is_empty() { args.query } else { title };
            print!("{}", render_empty(&title, width, color));
        }
    }

    ExitCode::SUCCESS
}

fn valid_language_pair(source: &str, target: &str) -> bool {
    source == "cz" || target == "cz"
}

/// Rendering degrades to rule-less output when the terminal size is
/// unknown (piped output, dumb terminals).
fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _rows)| columns as usize)
        .unwrap_or(0)
}
