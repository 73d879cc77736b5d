//! Command-line parsing for the benchmark binary.

use crate::LoopOrder;
use crate::error::{Error, Result};
use crate::harness::BenchConfig;

pub const USAGE: &str = "\
Usage: matmul-loops [OPTIONS]

Options:
  --n <N>            matrix size n (n x n) [default: 256]
  --runs <R>         timed runs per order [default: 3]
  --order <ORDERS>   ijk, ikj, kij, a comma-separated list, or all [default: ikj]
  --seed <S>         base seed; run r uses S+r for A and S+r+1 for B
  --verify           check the first run against ijk (n <= 128 only)
  --tolerance <EPS>  verification tolerance [default: 1e-6]
  -h, --help         print this message
";

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(BenchConfig),
    Help,
}

/// Parse arguments (without the program name).
///
/// Flags take their value either as the next argument or inline after `=`.
///
/// ```
/// use matmul_loops::cli::{parse_args, Command};
/// use matmul_loops::LoopOrder;
///
/// let cmd = parse_args(["--n", "64", "--order=kij", "--seed", "0"]).unwrap();
/// let Command::Run(config) = cmd else { panic!() };
/// assert_eq!(config.n, 64);
/// assert_eq!(config.orders, vec![LoopOrder::Kij]);
/// assert_eq!(config.seed, Some(0));
/// ```
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = BenchConfig::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--verify" => config.verify = true,
            "--n" => config.n = parse_value(&flag, value(&flag, inline, &mut args)?)?,
            "--runs" => {
                let raw = value(&flag, inline, &mut args)?;
                let runs: usize = parse_value(&flag, raw.clone())?;
                if runs == 0 {
                    return Err(invalid(&flag, raw));
                }
                config.runs = runs;
            }
            "--order" => config.orders = parse_orders(&value(&flag, inline, &mut args)?)?,
            "--seed" => config.seed = Some(parse_value(&flag, value(&flag, inline, &mut args)?)?),
            "--tolerance" => {
                let raw = value(&flag, inline, &mut args)?;
                let eps: f64 = parse_value(&flag, raw.clone())?;
                if !eps.is_finite() || eps < 0.0 {
                    return Err(invalid(&flag, raw));
                }
                config.tolerance = eps;
            }
            _ => return Err(Error::UnknownArgument(flag.clone())),
        }
    }

    Ok(Command::Run(config))
}

/// `all`, a single tag, or a comma-separated list of tags.
pub fn parse_orders(s: &str) -> Result<Vec<LoopOrder>> {
    if s == "all" {
        return Ok(LoopOrder::ALL.to_vec());
    }
    s.split(',').map(|tag| tag.trim().parse()).collect()
}

fn value<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String>
where
    I: Iterator<Item = String>,
{
    inline.or_else(|| args.next()).ok_or_else(|| Error::MissingValue {
        flag: flag.to_string(),
    })
}

fn parse_value<T: std::str::FromStr>(flag: &str, raw: String) -> Result<T> {
    raw.parse().map_err(|_| invalid(flag, raw))
}

fn invalid(flag: &str, value: String) -> Error {
    Error::InvalidValue {
        flag: flag.to_string(),
        value,
    }
}
