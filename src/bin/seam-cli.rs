use anyhow::{Context, Result};
use clap::Parser;

use std::fs;
use std::io::{self, Read, Write};

use seam::export::{self, ExportFormat};
use seam::opts::{Opts, Strategy};
use seam::preprocessor::Preprocessor;
use seam::words::Chunk;

fn main() -> Result<()> {
    seam::logging::init();
    let params = Params::parse();

    let raw = read_input(&params.input)?;
    let chunks: Vec<Chunk> =
        serde_json::from_str(&raw).context("failed to parse chunk JSON input")?;

    let preprocessor = Preprocessor::new(Opts {
        strategy: params.strategy,
        max_boundary_words: params.max_boundary_words,
    });
    let output = preprocessor.process(&chunks)?;

    if params.stats {
        let s = &output.stats;
        eprintln!(
            "{} paragraphs, {} words, {:.1}s, {:.1} wpm ({} of {} segments kept)",
            s.paragraph_count,
            s.total_words,
            s.total_duration,
            s.words_per_minute,
            output.processed_segment_count,
            output.original_segment_count,
        );
    }

    let rendered = export::render(&output.paragraphs, params.format)?;
    let stdout = io::stdout();
    let mut w = stdout.lock();
    w.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read chunk JSON from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))
}

#[derive(Parser, Debug)]
#[command(name = "seam")]
#[command(about = "Merge chunked transcription output into a deduplicated transcript")]
struct Params {
    /// Path to a JSON array of chunks, or '-' for stdin.
    #[arg(short = 'i', long = "input", default_value = "-")]
    pub input: String,

    #[arg(short = 's', long = "strategy", value_enum, default_value = "boundary")]
    pub strategy: Strategy,

    #[arg(long = "max-boundary-words", default_value_t = seam::dedup::DEFAULT_MAX_BOUNDARY_WORDS)]
    pub max_boundary_words: usize,

    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    pub format: ExportFormat,

    /// Print a one-line stats summary to stderr.
    #[arg(long = "stats", default_value_t = false)]
    pub stats: bool,
}
