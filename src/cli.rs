// Argument handling: maps raw command-line tokens to either a run
// configuration or a request to show usage. Parsing is total; every token
// list ends up as exactly one `Command`.

use std::ffi::OsStr;

/// Shape of the distribution to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 24 buckets, `00:00` through `23:00`.
    ByHour,
    /// 7 buckets, Sunday through Saturday.
    #[default]
    ByWeekday,
}

impl Mode {
    /// Recognise a distribution flag (`-d` or `-w`).
    pub fn from_flag(flag: &str) -> Option<Mode> {
        match flag {
            "-d" => Some(Mode::ByHour),
            "-w" => Some(Mode::ByWeekday),
            _ => None,
        }
    }
}

/// Immutable configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub account: String,
}

/// Outcome of argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Config),
}

pub const USAGE: &str = "\
Usage:
    twitterfreq [distribution] accountName

Arguments:
    distribution -- optional. -d or -w. -d distributes posts over the hours of the day,
                    -w over the days of the week. If absent, -w is assumed.
    accountName  -- the name of the account whose posts are counted.

For help, use
    twitterfreq -h
";

fn is_help_flag(token: &str) -> bool {
    token == "-h" || token == "-help"
}

/// Parse command-line tokens (program name excluded).
///
/// A help flag in first position wins over everything else. Two tokens
/// must be a distribution flag followed by the account name; an unknown
/// flag, or more than two tokens, falls back to help.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Command {
    match tokens {
        [] => Command::Help,
        [first, ..] if is_help_flag(first.as_ref()) => Command::Help,
        [account] => Command::Run(Config {
            mode: Mode::default(),
            account: account.as_ref().to_string(),
        }),
        [flag, account] => match Mode::from_flag(flag.as_ref()) {
            Some(mode) => Command::Run(Config {
                mode,
                account: account.as_ref().to_string(),
            }),
            None => Command::Help,
        },
        _ => Command::Help,
    }
}

/// Parse tokens straight from `std::env::args_os`. A token that is not
/// valid UTF-8 cannot name an account or a flag, so it yields help.
pub fn parse_os_args<S: AsRef<OsStr>>(tokens: &[S]) -> Command {
    let tokens: Option<Vec<&str>> = tokens.iter().map(|t| t.as_ref().to_str()).collect();
    match tokens {
        Some(tokens) => parse_args(&tokens[..]),
        None => Command::Help,
    }
}

/// Print the usage text to stdout.
pub fn print_help() {
    println!("{}", USAGE);
}
