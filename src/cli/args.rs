use std::path::PathBuf;

use thiserror::Error;

use crate::models::constants::{Density, GalaxySize, Prt, StartMode};

pub struct Args {
    pub seed: Option<u64>,
    pub size: GalaxySize,
    pub density: Density,
    pub start: StartMode,
    /// Primary trait of each player's race, in player order.
    pub players: Vec<Prt>,
    pub rules: Option<PathBuf>,
    pub json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            seed: None,
            size: GalaxySize::Tiny,
            density: Density::Normal,
            start: StartMode::Normal,
            players: vec![Prt::JoaT, Prt::JoaT],
            rules: None,
            json: false,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unknown argument: {0}")]
    Unknown(String),
}

pub enum Command {
    Generate(Args),
    Help,
}

pub const USAGE: &str = "\
Usage: stargen [OPTIONS]

Options:
  -s, --seed <INT>         Seed for the random number generator
      --size <SIZE>        tiny, small, medium, large or huge
      --density <DENSITY>  sparse, normal, dense or packed
      --start <MODE>       normal, mid or late
      --players <PRTS>     Comma-separated primary traits, e.g. JoaT,HE,IT
      --rules <PATH>       Ruleset JSON file
      --json               Print the universe as JSON
  -h, --help               Print help";

/// Parse the process arguments. Prints usage or the error and exits when
/// there is nothing to generate.
pub fn parse() -> Args {
    match parse_from(std::env::args().skip(1)) {
        Ok(Command::Generate(args)) => args,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    }
}

pub fn parse_from<I>(raw: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args::default();
    let mut iter = raw.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                let val = value(&mut iter, "--seed")?;
                args.seed = Some(val.parse::<u64>().map_err(|_| invalid("--seed", &val))?);
            }
            "--size" => {
                let val = value(&mut iter, "--size")?;
                args.size = GalaxySize::from_name(&val).ok_or_else(|| invalid("--size", &val))?;
            }
            "--density" => {
                let val = value(&mut iter, "--density")?;
                args.density = Density::from_name(&val).ok_or_else(|| invalid("--density", &val))?;
            }
            "--start" => {
                let val = value(&mut iter, "--start")?;
                args.start = StartMode::from_name(&val).ok_or_else(|| invalid("--start", &val))?;
            }
            "--players" => {
                let val = value(&mut iter, "--players")?;
                args.players = val
                    .split(',')
                    .map(|code| prt_from_code(code.trim()))
                    .collect::<Option<Vec<_>>>()
                    .filter(|players| !players.is_empty())
                    .ok_or_else(|| invalid("--players", &val))?;
            }
            "--rules" => {
                args.rules = Some(PathBuf::from(value(&mut iter, "--rules")?));
            }
            "--json" => args.json = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(ArgsError::Unknown(other.to_string())),
        }
    }

    Ok(Command::Generate(args))
}

fn value(iter: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<String, ArgsError> {
    iter.next().ok_or(ArgsError::MissingValue(flag))
}

fn invalid(flag: &'static str, value: &str) -> ArgsError {
    ArgsError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}

fn prt_from_code(code: &str) -> Option<Prt> {
    let prt = match code.to_ascii_uppercase().as_str() {
        "HE" => Prt::HE,
        "SS" => Prt::SS,
        "WM" => Prt::WM,
        "CA" => Prt::CA,
        "IS" => Prt::IS,
        "SD" => Prt::SD,
        "PP" => Prt::PP,
        "IT" => Prt::IT,
        "AR" => Prt::AR,
        "JOAT" => Prt::JoaT,
        _ => return None,
    };
    Some(prt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(raw: &[&str]) -> Result<Command, ArgsError> {
        parse_from(raw.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_without_arguments() {
        let Ok(Command::Generate(args)) = parse_args(&[]) else {
            panic!("expected generate");
        };
        assert_eq!(args.seed, None);
        assert_eq!(args.size, GalaxySize::Tiny);
        assert_eq!(args.players, vec![Prt::JoaT, Prt::JoaT]);
        assert!(!args.json);
    }

    #[test]
    fn reads_every_option() {
        let Ok(Command::Generate(args)) = parse_args(&[
            "-s", "42", "--size", "Small", "--density", "dense", "--start", "late", "--players",
            "he, it,joat", "--rules", "r.json", "--json",
        ]) else {
            panic!("expected generate");
        };
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.size, GalaxySize::Small);
        assert_eq!(args.density, Density::Dense);
        assert_eq!(args.start, StartMode::LateGame);
        assert_eq!(args.players, vec![Prt::HE, Prt::IT, Prt::JoaT]);
        assert_eq!(args.rules, Some(PathBuf::from("r.json")));
        assert!(args.json);
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse_args(&["--seed"]).err(), Some(ArgsError::MissingValue("--seed")));
        assert_eq!(
            parse_args(&["--size", "vast"]).err(),
            Some(ArgsError::InvalidValue {
                flag: "--size",
                value: "vast".to_string()
            })
        );
        assert_eq!(
            parse_args(&["--players", "HE,XX"]).err(),
            Some(ArgsError::InvalidValue {
                flag: "--players",
                value: "HE,XX".to_string()
            })
        );
        assert_eq!(parse_args(&["--warp"]).err(), Some(ArgsError::Unknown("--warp".to_string())));
        assert!(matches!(parse_args(&["-h"]), Ok(Command::Help)));
    }
}
