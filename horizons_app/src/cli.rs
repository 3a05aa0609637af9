// cli.rs - Command-line options, parsed by hand
// `HORIZONS_*` environment variables provide defaults that explicit flags override

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Cellular Horizons - Game of Life with shadow trails

USAGE:
    horizons_app [OPTIONS]

OPTIONS:
    --config=PATH        JSON config (rows, cols, tick_interval_ms, max_history, loop_check)
    --patterns=PATH      JSON pattern list: [{\"name\": ..., \"cells\": [[r, c], ...]}]
    --tick-ms=N          Milliseconds between generations while playing
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    Left / Right         Step through history

ENVIRONMENT VARIABLES:
    HORIZONS_CONFIG      Override --config
    HORIZONS_PATTERNS    Override --patterns
    HORIZONS_TICK_MS     Override --tick-ms
    RUST_LOG             Log filter (default: info)";

/// Parsed command-line options.
#[derive(Debug, Default, PartialEq)]
pub struct Opts {
    pub config: Option<PathBuf>,
    pub patterns: Option<PathBuf>,
    pub tick_ms: Option<u64>,
}

/// What the arguments asked for.
#[derive(Debug, PartialEq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse environment variables and command-line arguments, exiting on
    /// `--help`, `--version` or a bad argument.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("HORIZONS_CONFIG") {
            opts.config = Some(val.into());
        }
        if let Ok(val) = env::var("HORIZONS_PATTERNS") {
            opts.patterns = Some(val.into());
        }
        if let Ok(val) = env::var("HORIZONS_TICK_MS")
            && let Ok(n) = val.parse()
        {
            opts.tick_ms = Some(n);
        }

        let args: Vec<String> = env::args().skip(1).collect();
        match parse_args(opts, &args) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("horizons_app {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }
}

/// Applies `args` on top of `opts`.
pub fn parse_args(mut opts: Opts, args: &[String]) -> Result<Parsed, String> {
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Parsed::Help),
            "--version" | "-V" => return Ok(Parsed::Version),
            other => {
                if let Some(val) = other.strip_prefix("--config=") {
                    opts.config = Some(val.into());
                } else if let Some(val) = other.strip_prefix("--patterns=") {
                    opts.patterns = Some(val.into());
                } else if let Some(val) = other.strip_prefix("--tick-ms=") {
                    match val.parse() {
                        Ok(n) => opts.tick_ms = Some(n),
                        Err(_) => return Err(format!("Invalid --tick-ms value: {val}")),
                    }
                } else {
                    return Err(format!("Unknown argument: {other}"));
                }
            }
        }
    }
    Ok(Parsed::Run(opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_keeps_defaults() {
        assert_eq!(parse_args(Opts::default(), &[]), Ok(Parsed::Run(Opts::default())));
    }

    #[test]
    fn flags_override_env_defaults() {
        let from_env = Opts {
            tick_ms: Some(500),
            ..Opts::default()
        };
        let parsed = parse_args(from_env, &args(&["--tick-ms=40", "--patterns=p.json"])).unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Opts {
                config: None,
                patterns: Some("p.json".into()),
                tick_ms: Some(40),
            })
        );
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse_args(Opts::default(), &args(&["-h"])), Ok(Parsed::Help));
        assert_eq!(parse_args(Opts::default(), &args(&["--version"])), Ok(Parsed::Version));
    }

    #[test]
    fn bad_arguments() {
        assert!(parse_args(Opts::default(), &args(&["--tick-ms=fast"])).is_err());
        assert!(parse_args(Opts::default(), &args(&["--bogus"])).is_err());
    }

    #[test]
    fn help_text_mentions_env() {
        assert!(HELP_TEXT.contains("HORIZONS_CONFIG"));
        assert!(!VERSION.is_empty());
    }
}
