//! `regex-mini`: compile a pattern and report how it matches each input.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use regex_mini_rs::{compile, Error, Flags, Match, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// fullmatch, then match
    All,
    Full,
    Prefix,
    Search,
}

#[derive(Debug, Parser)]
#[command(name = "regex-mini", version, about = "Backtracking regex tester")]
struct Cli {
    /// Pattern to compile
    pattern: String,

    /// Candidate strings; read from stdin, one per line, when omitted
    strings: Vec<String>,

    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Accepted, has no effect on matching
    #[arg(short = 'm', long)]
    multiline: bool,

    #[arg(short = 's', long)]
    dot_all: bool,

    /// Accepted, has no effect on matching
    #[arg(short = 'x', long)]
    verbose: bool,

    /// Dump the compiled pattern and trace every match step
    #[arg(long)]
    debug: bool,

    /// Raw flag bits, combined with the switches above
    #[arg(long, default_value_t = 0)]
    flags: u32,

    /// Flag by name or alias (IGNORECASE, I, DOTALL, S, ...); repeatable
    #[arg(long = "flag", value_name = "NAME", value_parser = parse_flag)]
    named: Vec<Flags>,

    #[arg(long, value_enum, default_value_t = Mode::All)]
    mode: Mode,
}

impl Cli {
    fn flags(&self) -> Flags {
        let switches = [
            (self.ignore_case, Flags::IGNORECASE),
            (self.multiline, Flags::MULTILINE),
            (self.dot_all, Flags::DOTALL),
            (self.verbose, Flags::VERBOSE),
            (self.debug, Flags::DEBUG),
        ];

        switches
            .into_iter()
            .filter(|(on, _)| *on)
            .map(|(_, flag)| flag)
            .chain(self.named.iter().copied())
            .fold(Flags::from_bits_truncate(self.flags), |flags, flag| flags | flag)
    }
}

fn parse_flag(name: &str) -> Result<Flags, String> {
    Flags::lookup(name).ok_or_else(|| format!("unknown flag `{}`", name))
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "off" };
    let filter =
        EnvFilter::try_from_env("REGEX_MINI_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.flags().contains(Flags::DEBUG));

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("regex-mini: {:#}", e);
            if e.downcast_ref::<Error>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::from(3)
            }
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let pattern = compile(cli.pattern.as_str(), cli.flags())?;

    println!("Compiled Pattern: {}", pattern);
    println!("Compiled Nodes: {:?}", pattern.nodes());
    println!();

    let strings = if cli.strings.is_empty() {
        io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
    } else {
        cli.strings.clone()
    };

    let mut matched = false;
    for string in &strings {
        matched |= report(&pattern, cli.mode, string);
    }

    Ok(matched)
}

fn report(pattern: &Pattern, mode: Mode, string: &str) -> bool {
    let show = |name: &str, result: Option<Match<'_>>| {
        match &result {
            Some(m) => println!("{}({:?}): {}", name, string, m),
            None => println!("{}({:?}): None", name, string),
        }
        result.is_some()
    };

    match mode {
        Mode::All => {
            let full = show("fullmatch", pattern.fullmatch(string));
            let prefix = show("match", pattern.r#match(string));
            full || prefix
        }
        Mode::Full => show("fullmatch", pattern.fullmatch(string)),
        Mode::Prefix => show("match", pattern.r#match(string)),
        Mode::Search => show("search", pattern.search(string)),
    }
}
