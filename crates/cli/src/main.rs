mod config;
mod pipe;

use std::io::{self, IsTerminal};

use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use colored::{control::set_override, Colorize};
use quickfield_core::{FieldType, FixedClock, Quickfield};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use config::Config;

const LONG_ABOUT: &str = r#"
Quickfield expands the data-entry shortcuts of classic ERP input fields
into fully formatted date and time values.

SHORTCUTS:
  Date:      t or .           today
             f, fri, friday   Friday of the current week
             5                the 5th of the current month
             10.9             October 9th of the current year
             1.1.16           January 1st, 2016
  Time:      t or .           the current time
             5                05:00:00
             0530             05:30:00
             5.5.30,5         05:05:30.5
  Datetime:  any date and time shortcut separated by a space

Anything that matches no shortcut is printed back unchanged.

EXAMPLES:
  qf -f date 1.1.16                1/1/2016
  qf -f time 0530                  05:30:00
  qf "1.1.16 0530"                 1/1/2016 05:30:00
  qf --at 2016-08-30T14:27:01 t    8/30/2016 14:27:01

PIPED INPUT:
  Each line of stdin is expanded on its own:
    echo 0530 | qf -f time
    cat entries.txt | qf -f date

CONFIGURATION:
  Settings can be configured via CLI flags, environment variables, or config file.
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting    | CLI flag        | Env var       | Default
  -----------|-----------------|---------------|---------
  field      | -f, --field     | QF_FIELD      | datetime
  no_color   | -C, --no-color  | QF_NO_COLOR   | false

  Config file location: qf --config-path
  Generate default config: qf --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"#;

#[derive(Parser)]
#[command(name = "qf")]
#[command(version)]
#[command(about = "Expand date/time data-entry shorthand")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// The shorthand token to expand
    ///
    /// Omit it and pipe lines on stdin to expand a whole stream.
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Field type to expand for: date, time, or datetime
    #[arg(long, short = 'f', value_name = "TYPE")]
    field: Option<String>,

    /// Anchor "now" at a fixed instant
    ///
    /// Accepts YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS. Relative shortcuts like
    /// `t` or `fri` then expand reproducibly, which is what you want in
    /// scripts and tests.
    #[arg(long, value_name = "WHEN")]
    at: Option<String>,

    /// Output as JSON (for scripting/piping)
    #[arg(long, short = 'j')]
    json: bool,

    /// Show the original input next to the expansion
    #[arg(long, short = 'e')]
    echo: bool,

    /// List the shorthand grammars and their rules
    #[arg(long)]
    grammars: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the config file path
    #[arg(long)]
    config_path: bool,

    /// Create a default config file
    #[arg(long)]
    config_init: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!(
                    "{}: Cannot determine config directory",
                    "error".red().bold()
                );
                std::process::exit(1);
            }
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Initialize tracing based on verbosity level
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Load config file and merge with CLI args
    // Precedence: CLI args > Environment vars > Config file > Defaults
    let file_config = Config::load();

    if let Some(path) = Config::path() {
        if path.exists() {
            tracing::debug!("Loaded config from: {}", path.display());
        } else {
            tracing::trace!("No config file at: {}", path.display());
        }
    }

    if cli.no_color || file_config.no_color() {
        set_override(false);
    }

    // Handle --grammars (static listing, no input needed)
    if cli.grammars {
        print_grammars();
        return;
    }

    // Resolve the field type with source logging
    let field_name = if let Some(ref name) = cli.field {
        tracing::debug!("field = {} (from CLI)", name);
        name.clone()
    } else if let Some(name) = file_config.field() {
        let source = if std::env::var("QF_FIELD").is_ok() {
            "env QF_FIELD"
        } else {
            "config file"
        };
        tracing::debug!("field = {} (from {})", name, source);
        name
    } else {
        "datetime".to_string()
    };

    let field: FieldType = match field_name.parse() {
        Ok(field) => field,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    };

    // Build the engine, pinning the clock when --at is given
    let engine = match cli.at.as_deref().map(parse_anchor) {
        None => Quickfield::new(),
        Some(Ok(anchor)) => Quickfield::with_clock(FixedClock(anchor)),
        Some(Err(e)) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    };

    match cli.input {
        Some(ref input) => {
            let token = input.trim();
            let expanded = engine.expand(field, token);
            print_single(field, token, &expanded, &cli);
        }
        None => {
            if io::stdin().is_terminal() {
                eprintln!(
                    "{}: no input given (try `qf --help`)",
                    "error".red().bold()
                );
                std::process::exit(1);
            }
            let pipe_config = pipe::PipeModeConfig {
                json: cli.json,
                echo: cli.echo,
            };
            if let Err(e) = pipe::run_pipe_mode(&engine, field, &pipe_config) {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
    }
}

/// Parse the `--at` anchor: a date-time, or a bare date at midnight.
fn parse_anchor(s: &str) -> Result<NaiveDateTime, String> {
    let trimmed = s.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(|date| {
                date.and_hms_opt(0, 0, 0)
                    .expect("midnight is a valid time of day")
            })
        })
        .map_err(|_| {
            format!(
                "invalid anchor '{}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                s
            )
        })
}

/// Print one expanded token.
fn print_single(field: FieldType, token: &str, expanded: &str, cli: &Cli) {
    if cli.json {
        let output = serde_json::json!({
            "field": field,
            "input": token,
            "expanded": expanded,
            "changed": expanded != token,
        });
        println!("{}", output);
        return;
    }

    if cli.echo {
        let rendered = if expanded == token {
            expanded.dimmed().to_string()
        } else {
            expanded.green().to_string()
        };
        println!("{} {} {}", token, "\u{2192}".cyan(), rendered);
    } else {
        println!("{}", expanded);
    }
}

/// Print every grammar's rules, `--formats` style.
fn print_grammars() {
    println!("{}", "Shorthand Grammars".bold().underline());
    println!();

    for grammar in Quickfield::grammars() {
        println!(
            "{} {} {}",
            "\u{25b6}".blue(),
            grammar.field().name().green().bold(),
            format!("(-f {})", grammar.field().id()).dimmed()
        );
        for rule in grammar.rules() {
            println!("  {} {}", "\u{2192}".cyan(), rule.synopsis());
            println!("      {}", format!("e.g. {}", rule.example()).dimmed());
        }
        println!();
    }

    println!("Rules are tried top to bottom; the first match wins.");
    println!("Input that matches no rule is passed through unchanged.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_anchor_datetime() {
        let anchor = parse_anchor("2016-08-30T14:27:01").unwrap();
        assert_eq!(
            anchor,
            NaiveDate::from_ymd_opt(2016, 8, 30)
                .unwrap()
                .and_hms_opt(14, 27, 1)
                .unwrap()
        );
        assert_eq!(parse_anchor("2016-08-30 14:27:01").unwrap(), anchor);
    }

    #[test]
    fn test_parse_anchor_bare_date_is_midnight() {
        let anchor = parse_anchor("2016-08-30").unwrap();
        assert_eq!(
            anchor,
            NaiveDate::from_ymd_opt(2016, 8, 30)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_anchor_rejects_garbage() {
        assert!(parse_anchor("yesterday").is_err());
        assert!(parse_anchor("2016-13-40").is_err());
        assert!(parse_anchor("").is_err());
    }
}
