use serde::Serialize;
use std::env::VarError;
use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

use fib_program::fib;

/// Number of terms the `fib` driver prints.
pub const DEFAULT_TERMS: i32 = 10;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("could not parse {var}={value:?}: {reason}")]
    Config {
        var: String,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("fib({n}) = {fib} but fastfib({n}) = {fastfib}")]
    Mismatch { n: u64, fib: u64, fastfib: u64 },
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub program: &'static str,
    pub n: u64,
    pub result: u64,
    pub compute_secs: f32,
}

/// Reads `var` from the environment, falling back to `def` when unset.
pub fn env_or<T: FromStr>(var: &str, def: T) -> Result<T, ScriptError>
where
    <T as FromStr>::Err: Display,
{
    parse_var(var, std::env::var(var), def)
}

fn parse_var<T: FromStr>(
    var: &str,
    value: Result<String, VarError>,
    def: T,
) -> Result<T, ScriptError>
where
    <T as FromStr>::Err: Display,
{
    match value {
        Ok(s) => s.parse::<T>().map_err(|e| ScriptError::Config {
            var: var.to_string(),
            value: s,
            reason: e.to_string(),
        }),
        Err(VarError::NotPresent) => Ok(def),
        Err(VarError::NotUnicode(os)) => Err(ScriptError::Config {
            var: var.to_string(),
            value: os.to_string_lossy().into_owned(),
            reason: "not valid unicode".to_string(),
        }),
    }
}

/// Writes the header line and the first `n` terms, each followed by a space.
pub fn run<W: Write>(out: &mut W, n: i32) -> io::Result<()> {
    writeln!(out, "Fibonacci Series up to {n} terms:")?;
    for i in 0..n {
        write!(out, "{} ", fib(i))?;
    }
    writeln!(out)?;
    out.flush()
}

/// Logs go to stderr; stdout is reserved for program output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(n: i32) -> String {
        let mut buf = Vec::new();
        run(&mut buf, n).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn ten_terms() {
        assert_eq!(
            render(DEFAULT_TERMS),
            "Fibonacci Series up to 10 terms:\n0 1 1 2 3 5 8 13 21 34 \n"
        );
    }

    #[test]
    fn zero_terms() {
        assert_eq!(render(0), "Fibonacci Series up to 0 terms:\n\n");
    }

    #[test]
    fn wrapped_terms_print_signed() {
        let out = render(48);
        assert!(out.ends_with("1836311903 -1323752223 \n"));
    }

    #[test]
    fn env_or_unset_uses_default() {
        assert_eq!(env_or("FIB_SCRIPT_TEST_UNSET", 7u64).unwrap(), 7);
    }

    #[test]
    fn parse_var_values() {
        assert_eq!(parse_var("FIB_ARG", Ok("42".to_string()), 7u64).unwrap(), 42);
        assert_eq!(parse_var("FIB_ARG", Err(VarError::NotPresent), 7u64).unwrap(), 7);

        let err = parse_var("FIB_ARG", Ok("forty".to_string()), 7u64).unwrap_err();
        assert!(matches!(err, ScriptError::Config { ref var, .. } if var == "FIB_ARG"));
        assert!(err.to_string().starts_with("could not parse FIB_ARG=\"forty\""));
    }

    #[cfg(unix)]
    #[test]
    fn parse_var_rejects_non_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"9\xff").to_os_string();
        let err = parse_var("FIB_ARG", Err(VarError::NotUnicode(raw)), 7u64).unwrap_err();
        match err {
            ScriptError::Config { var, value, reason } => {
                assert_eq!(var, "FIB_ARG");
                assert_eq!(value, "9\u{fffd}");
                assert_eq!(reason, "not valid unicode");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn stats_json() {
        let stats = Stats {
            program: "fib",
            n: 10,
            result: 55,
            compute_secs: 0.5,
        };
        assert_eq!(
            serde_json::to_string(&stats).unwrap(),
            r#"{"program":"fib","n":10,"result":55,"compute_secs":0.5}"#
        );
    }
}
