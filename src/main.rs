mod report;
mod settings;

use crate::settings::Settings;
use anyhow::{Context, bail};
use chrono::Utc;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    path: Option<String>,
    zip: Option<String>,
    timezone: Option<String>,
    json: bool,
}

enum Command {
    Run(Args),
    Help,
    Version,
}

fn main() -> anyhow::Result<()> {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{}", usage_text());
            std::process::exit(2);
        }
    };
    let args = match command {
        Command::Help => {
            println!("{}", usage_text());
            return Ok(());
        }
        Command::Version => {
            println!("nba-tonight {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Run(args) => args,
    };

    better_panic::install();
    setup_logging();

    let mut settings = Settings::load();
    if let Some(zip) = args.zip {
        settings.zip = Some(zip);
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    debug!("settings: {settings:?}");

    let raw = read_input(args.path.as_deref())?;
    let scoreboard: Value = serde_json::from_str(&raw).context("scoreboard is not valid JSON")?;

    let now = Utc::now();
    let games = tonight_engine::feed::normalize_scoreboard_at(&scoreboard, now);
    let region = settings.region();
    info!("{} games loaded, viewer region {region}", games.len());

    let rows = report::build(&games, &settings, &region, now);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", report::render(&rows, &settings, &region, now));
    }
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Command> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--json" => parsed.json = true,
            "--zip" => parsed.zip = Some(args.next().context("--zip needs a value")?),
            "--tz" => parsed.timezone = Some(args.next().context("--tz needs a value")?),
            "-" => parsed.path = None,
            flag if flag.starts_with('-') => bail!("Unknown argument: {flag}"),
            path => {
                if parsed.path.is_some() {
                    bail!("Only one scoreboard file may be given");
                }
                parsed.path = Some(path.to_string());
            }
        }
    }
    Ok(Command::Run(parsed))
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading scoreboard from stdin")?;
            Ok(buf)
        }
    }
}

/// Log records go to stderr so stdout stays clean for `--json`.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn usage_text() -> &'static str {
    "nba-tonight - tonight's NBA games with TV and League Pass status

Usage:
  nba-tonight [--zip <code>] [--tz <zone>] [--json] [scoreboard.json | -]
  nba-tonight --help
  nba-tonight --version

Reads an ESPN NBA scoreboard JSON document from the given file, or stdin.

Environment:
  TONIGHT_TZ               IANA time zone for the tonight window (default America/New_York)
  TONIGHT_ZIP              Viewer ZIP code, overrides the coarse region
  TONIGHT_COUNTRY          Coarse country code, e.g. US
  TONIGHT_STATE            Coarse state or province code, e.g. CA
  TONIGHT_FAVORITE         Team abbreviation to list first
  TONIGHT_HIDDEN_NETWORKS  Comma-separated networks never shown
  TONIGHT_HIDE_FINISHED    1 to hide finished games
  TONIGHT_ALL_DAY          1 to list every game in the feed
  RUST_LOG                 Log filter (default warn)"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Command> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    fn run_args(args: &[&str]) -> Args {
        match parse(args) {
            Ok(Command::Run(args)) => args,
            _ => panic!("expected a run command for {args:?}"),
        }
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(run_args(&[]), Args::default());
        assert_eq!(run_args(&["-"]).path, None);
    }

    #[test]
    fn flags_and_path() {
        let args = run_args(&["--zip", "10001", "--tz", "America/Chicago", "--json", "today.json"]);
        assert_eq!(
            args,
            Args {
                path: Some("today.json".into()),
                zip: Some("10001".into()),
                timezone: Some("America/Chicago".into()),
                json: true,
            }
        );
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert!(matches!(parse(&["--json", "--help"]), Ok(Command::Help)));
        assert!(matches!(parse(&["-V"]), Ok(Command::Version)));
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--zip"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }

    #[test]
    fn usage_lists_every_setting() {
        for key in ["TONIGHT_TZ", "TONIGHT_ZIP", "TONIGHT_HIDDEN_NETWORKS", "--json"] {
            assert!(usage_text().contains(key), "{key}");
        }
    }
}
