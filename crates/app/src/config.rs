use std::fmt;

use hub_core::model::DEFAULT_STUDY_HOURS;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

pub fn usage() -> String {
    format!(
        "Usage:
  cargo run -p app -- [--name <learner>]... [--hours <0-12>] [--lang <language>]...
                     [--challenges <n>] [--seed <u64>] [--json] [-v]

Defaults:
  --hours {DEFAULT_STUDY_HOURS}
  --challenges 1

Environment:
  HUB_NAME, HUB_STUDY_HOURS, HUB_LANGUAGES (comma-separated), HUB_SEED, RUST_LOG
"
    )
}

pub fn print_usage() {
    eprint!("{}", usage());
}

/// Text printed when a run fails: the error once, plus usage for bad flags.
pub fn failure_message(err: &(dyn std::error::Error + 'static)) -> String {
    if err.is::<ArgsError>() {
        format!("{err}\n{}", usage())
    } else {
        format!("{err}\n")
    }
}

/// Settings for one dashboard run, from flags with env fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub names: Vec<String>,
    pub study_hours: u8,
    pub languages: Vec<String>,
    pub challenges: u32,
    pub seed: Option<u64>,
    pub json: bool,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            study_hours: DEFAULT_STUDY_HOURS,
            languages: Vec::new(),
            challenges: 1,
            seed: None,
            json: false,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Parses flags, falling back to `env` for anything not given.
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut config = Self::from_env(&env)?;
        let mut names_from_flags = Vec::new();
        let mut langs_from_flags = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--name" => names_from_flags.push(require_value(&mut args, "--name")?),
                "--lang" => langs_from_flags.push(require_value(&mut args, "--lang")?),
                "--hours" => {
                    let raw = require_value(&mut args, "--hours")?;
                    config.study_hours = parse_number("--hours", raw)?;
                }
                "--challenges" => {
                    let raw = require_value(&mut args, "--challenges")?;
                    config.challenges = parse_number("--challenges", raw)?;
                }
                "--seed" => {
                    let raw = require_value(&mut args, "--seed")?;
                    config.seed = Some(parse_number("--seed", raw)?);
                }
                "--json" => config.json = true,
                "-v" | "--verbose" => config.verbose = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if !names_from_flags.is_empty() {
            config.names = names_from_flags;
        }
        if !langs_from_flags.is_empty() {
            config.languages = langs_from_flags;
        }
        Ok(Some(config))
    }

    fn from_env(env: &impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        let mut config = Self::default();
        if let Some(raw) = env("HUB_NAME") {
            config.names = split_list(&raw);
        }
        if let Some(raw) = env("HUB_LANGUAGES") {
            config.languages = split_list(&raw);
        }
        if let Some(raw) = env("HUB_STUDY_HOURS") {
            config.study_hours = parse_number("HUB_STUDY_HOURS", raw)?;
        }
        if let Some(raw) = env("HUB_SEED") {
            config.seed = Some(parse_number("HUB_SEED", raw)?);
        }
        Ok(config)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
