//! Pipe mode for expanding stdin line by line.
//!
//! Each line is trimmed and expanded as one shorthand token; lines that
//! match no rule come back unchanged, so the stream is safe to run over
//! mixed input.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use quickfield_core::{FieldType, Quickfield};

/// Configuration for pipe mode.
pub struct PipeModeConfig {
    /// Output as JSON lines instead of human-readable
    pub json: bool,
    /// Show the original token next to the expansion
    pub echo: bool,
}

/// Run pipe mode, expanding stdin line by line.
pub fn run_pipe_mode(
    engine: &Quickfield,
    field: FieldType,
    config: &PipeModeConfig,
) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let handle = stdin.lock();
    let mut out = stdout.lock();

    for line_result in handle.lines() {
        let line = line_result?;
        let token = line.trim();
        let expanded = engine.expand(field, token);
        print_line(&mut out, field, token, &expanded, config)?;
    }

    Ok(())
}

/// Print one expanded line.
fn print_line(
    out: &mut impl Write,
    field: FieldType,
    token: &str,
    expanded: &str,
    config: &PipeModeConfig,
) -> io::Result<()> {
    if config.json {
        return print_json_line(out, field, token, expanded);
    }

    if config.echo {
        let rendered = if expanded == token {
            expanded.dimmed().to_string()
        } else {
            expanded.green().to_string()
        };
        writeln!(out, "{} {} {}", token, "\u{2192}".cyan(), rendered)?;
    } else {
        writeln!(out, "{}", expanded)?;
    }

    Ok(())
}

/// Print JSON output for a line.
fn print_json_line(
    out: &mut impl Write,
    field: FieldType,
    token: &str,
    expanded: &str,
) -> io::Result<()> {
    use serde_json::json;

    let output = json!({
        "field": field,
        "input": token,
        "expanded": expanded,
        "changed": expanded != token,
    });

    writeln!(out, "{}", output)?;
    Ok(())
}
