//! Export renderers that serialize paragraph lists into various formats.
//!
//! Unlike a streaming encoder, export runs over the fully assembled
//! paragraph list, so each renderer is a pure `&[Paragraph] -> String`
//! function. All timestamps rendered here are absolute timeline time.

use serde::{Deserialize, Serialize};

use crate::paragraphs::Paragraph;
use crate::Result;

/// The supported output formats for an assembled transcript.
///
/// Using an enum avoids stringly-typed conditionals and keeps format
/// selection explicit and discoverable. Each variant maps to a concrete
/// renderer below; `ValueEnum` lets the CLI expose the same set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Paragraph texts joined by blank lines.
    #[default]
    Text,

    /// Markdown with `## [MM:SS]` paragraph headers.
    Markdown,

    /// SubRip subtitles (numbered cues, `HH:MM:SS,mmm` timing).
    Srt,

    /// The full paragraph array as pretty-printed JSON.
    Json,

    /// A self-contained styled HTML document.
    Html,
}

/// Render paragraphs in the requested format.
pub fn render(paragraphs: &[Paragraph], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(render_text(paragraphs)),
        ExportFormat::Markdown => Ok(render_markdown(paragraphs)),
        ExportFormat::Srt => Ok(render_srt(paragraphs)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(paragraphs)?),
        ExportFormat::Html => Ok(render_html(paragraphs)),
    }
}

fn render_text(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_markdown(paragraphs: &[Paragraph]) -> String {
    let mut out = String::new();
    for p in paragraphs {
        out.push_str(&format!("## [{}]\n\n{}\n\n", format_timestamp_mmss(p.start), p.text));
    }
    out.trim_end().to_string()
}

/// SRT cues are numbered from 1 and emitted for every paragraph, empty ones
/// included, so cue numbering stays aligned with paragraph order.
fn render_srt(paragraphs: &[Paragraph]) -> String {
    let mut out = String::new();
    for (i, p) in paragraphs.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp_srt(p.start),
            format_timestamp_srt(p.end),
            p.text
        ));
    }
    out
}

fn render_html(paragraphs: &[Paragraph]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Transcript</title>\n<style>\n\
         body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; line-height: 1.6; }\n\
         .timestamp { color: #888; font-size: 0.85em; font-variant-numeric: tabular-nums; }\n\
         p { margin: 0.25rem 0 1.25rem; }\n\
         </style>\n</head>\n<body>\n<h1>Transcript</h1>\n",
    );
    for p in paragraphs {
        out.push_str(&format!(
            "<section>\n<span class=\"timestamp\">[{}]</span>\n<p>{}</p>\n</section>\n",
            format_timestamp_mmss(p.start),
            escape_html(&p.text)
        ));
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// Format seconds as `MM:SS` (minutes are not wrapped at the hour).
fn format_timestamp_mmss(seconds: f64) -> String {
    let total_s = seconds.max(0.0).round() as u64;
    format!("{:02}:{:02}", total_s / 60, total_s % 60)
}

/// Format seconds into an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Rounding policy:
/// - We round to the nearest millisecond to reduce drift when converting from `f64`.
fn format_timestamp_srt(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;

    let s = total_s % 60;
    let total_m = total_s / 60;

    let m = total_m % 60;
    let h = total_m / 60;

    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
