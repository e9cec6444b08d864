use std::fmt;
use std::io::{self, BufRead, Write};

use aura_core::RewardTable;
use aura_core::model::{Difficulty, DifficultyParseError};
use services::{
    Clock, DEFAULT_ANSWER_BOUND, DEFAULT_HISTORY_LIMIT, PracticeService, PracticeSettings,
    SessionError, stats_line,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDifficulty(DifficultyParseError),
    InvalidSeed { raw: String },
    InvalidHistory { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDifficulty(err) => write!(f, "invalid --difficulty value: {err}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidHistory { raw } => write!(f, "invalid --history value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--difficulty <easy|medium|hard>] [--seed <u64>]");
    eprintln!("                      [--history <n>] [--no-bound]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --difficulty easy");
    eprintln!("  --history {DEFAULT_HISTORY_LIMIT}");
    eprintln!("  answers limited to ±{DEFAULT_ANSWER_BOUND} unless --no-bound");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  AURA_DIFFICULTY, AURA_SEED, AURA_HISTORY, RUST_LOG");
}

fn print_commands(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Type an answer, or one of:")?;
    writeln!(out, "  :skip            new question, no attempt counted")?;
    writeln!(out, "  :stats           one-line stats")?;
    writeln!(out, "  :summary         session summary with recent answers")?;
    writeln!(out, "  :json            session summary as JSON")?;
    writeln!(out, "  :level <tier>    switch difficulty")?;
    writeln!(out, "  :reset           reset session stats")?;
    writeln!(out, "  :quit            leave")
}

struct Args {
    difficulty: Difficulty,
    seed: Option<u64>,
    history_limit: usize,
    bounded: bool,
    /// Environment values that failed to parse and were ignored. Logged once
    /// tracing is up.
    ignored_env: Vec<(&'static str, String)>,
}

/// Reads `key` through `env` and parses it, remembering unparseable values.
fn env_value<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    ignored: &mut Vec<(&'static str, String)>,
) -> Option<T> {
    let raw = env(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            ignored.push((key, raw));
            None
        }
    }
}

impl Args {
    /// Environment first, then flags. `env` is `std::env::var` in the binary.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut ignored_env = Vec::new();
        let mut difficulty: Difficulty =
            env_value(&env, "AURA_DIFFICULTY", &mut ignored_env).unwrap_or_default();
        let mut seed: Option<u64> = env_value(&env, "AURA_SEED", &mut ignored_env);
        let mut history_limit: usize =
            env_value(&env, "AURA_HISTORY", &mut ignored_env).unwrap_or(DEFAULT_HISTORY_LIMIT);
        let mut bounded = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--difficulty" | "-d" => {
                    let value = require_value(args, "--difficulty")?;
                    difficulty = value.parse().map_err(ArgsError::InvalidDifficulty)?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--history" => {
                    let value = require_value(args, "--history")?;
                    history_limit = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidHistory { raw: value.clone() })?;
                }
                "--no-bound" => bounded = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            difficulty,
            seed,
            history_limit,
            bounded,
            ignored_env,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input<'a> {
    Answer(&'a str),
    Skip,
    Stats,
    Summary,
    Json,
    Level(&'a str),
    Reset,
    Quit,
    Help,
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return Self::Answer(line);
        };
        let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
        match name {
            "skip" | "s" => Self::Skip,
            "stats" => Self::Stats,
            "summary" | "finish" => Self::Summary,
            "json" => Self::Json,
            "level" | "l" => Self::Level(rest.trim()),
            "reset" => Self::Reset,
            "quit" | "q" => Self::Quit,
            _ => Self::Help,
        }
    }
}

fn init_tracing() {
    // stderr keeps log lines out of the prompt.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn ask_question(
    out: &mut impl Write,
    practice: &mut PracticeService,
    difficulty: Difficulty,
) -> io::Result<()> {
    let question = practice.generate_question(difficulty);
    writeln!(out)?;
    writeln!(out, "[{difficulty}] Solve:  {question}")?;
    write!(out, "> ")?;
    out.flush()
}

fn confirm(
    out: &mut impl Write,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<bool> {
    write!(out, "Reset current session stats? [y/N] ")?;
    out.flush()?;
    let answer = lines.next().transpose()?.unwrap_or_default();
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    for (key, raw) in &parsed.ignored_env {
        tracing::warn!(key, value = %raw, "ignoring invalid environment value");
    }

    let bound = parsed.bounded.then_some(DEFAULT_ANSWER_BOUND);
    let settings =
        PracticeSettings::new(parsed.seed, bound, parsed.history_limit, RewardTable::standard())?;
    let mut practice = PracticeService::new(&settings, Clock::System);
    tracing::info!(
        difficulty = %parsed.difficulty,
        seed = ?settings.seed(),
        "starting practice"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    writeln!(out, "Aura Maths")?;
    for tier in practice.tiers() {
        writeln!(out, "  {}", tier.description)?;
    }
    print_commands(&mut out)?;

    let mut difficulty = parsed.difficulty;
    ask_question(&mut out, &mut practice, difficulty)?;

    while let Some(line) = lines.next() {
        let line = line?;
        match Input::parse(&line) {
            Input::Answer(raw) => match practice.submit_current(raw) {
                Ok(record) if record.is_correct() => {
                    writeln!(out, "Correct! +{} coin(s)", record.coins())?;
                    writeln!(out, "{}", stats_line(practice.snapshot()))?;
                    ask_question(&mut out, &mut practice, difficulty)?;
                }
                Ok(record) => {
                    writeln!(out, "Not quite. Correct answer: {}", record.expected())?;
                    writeln!(out, "{}", stats_line(practice.snapshot()))?;
                    ask_question(&mut out, &mut practice, difficulty)?;
                }
                Err(SessionError::InvalidInput(err)) => {
                    writeln!(out, "{err}")?;
                    write!(out, "> ")?;
                    out.flush()?;
                }
                Err(err) => {
                    writeln!(out, "{err}")?;
                    ask_question(&mut out, &mut practice, difficulty)?;
                }
            },
            Input::Skip => {
                let question = practice.skip(difficulty);
                writeln!(out)?;
                writeln!(out, "[{difficulty}] Solve:  {question}")?;
                write!(out, "> ")?;
                out.flush()?;
            }
            Input::Stats => {
                writeln!(out, "{}", stats_line(practice.snapshot()))?;
                write!(out, "> ")?;
                out.flush()?;
            }
            Input::Summary => {
                writeln!(out, "Session Summary")?;
                writeln!(out, "{}", practice.summary().render())?;
                write!(out, "> ")?;
                out.flush()?;
            }
            Input::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&practice.summary())?)?;
                write!(out, "> ")?;
                out.flush()?;
            }
            Input::Level(name) => {
                let question = practice.generate_question_named(name);
                if let Some(pending) = practice.current() {
                    difficulty = pending.difficulty;
                }
                writeln!(out, "Difficulty: {difficulty}")?;
                writeln!(out, "[{difficulty}] Solve:  {question}")?;
                write!(out, "> ")?;
                out.flush()?;
            }
            Input::Reset => {
                if confirm(&mut out, &mut lines)? {
                    practice.reset_session();
                    writeln!(out, "{}", stats_line(practice.snapshot()))?;
                    ask_question(&mut out, &mut practice, difficulty)?;
                } else {
                    write!(out, "> ")?;
                    out.flush()?;
                }
            }
            Input::Quit => break,
            Input::Help => {
                print_commands(&mut out)?;
                write!(out, "> ")?;
                out.flush()?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", practice.summary().render())?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
