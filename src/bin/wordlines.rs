//! `wordlines` — print a word/line-range index for a text file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use wordlines::{
    create_index_with, BoundaryPolicy, Indexer, ReportFormat, ReportOptions, TokenFilter,
    Tokenizer, DEFAULT_WORD_WIDTH,
};

#[derive(Parser)]
#[command(
    name = "wordlines",
    about = "Index the words of a text file by the lines they occur on",
    version
)]
struct Cli {
    /// Text file to index
    path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Column width the word is padded to in text output
    #[arg(long, default_value_t = DEFAULT_WORD_WIDTH)]
    width: usize,

    /// Drop a single trailing character after the last delimiter of a line
    #[arg(long)]
    legacy_boundary: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let boundary = if cli.legacy_boundary {
        BoundaryPolicy::DropSingleTrailing
    } else {
        BoundaryPolicy::KeepTrailing
    };
    let indexer = Indexer::with_parts(Tokenizer::with_boundary(boundary), TokenFilter::default());
    let options = ReportOptions {
        format: cli.format.into(),
        word_width: cli.width,
    };

    match create_index_with(&cli.path, &indexer, &options, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
