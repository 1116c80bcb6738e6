use fib_script::{init_tracing, run, ScriptError, DEFAULT_TERMS};
use std::io;

fn main() -> Result<(), ScriptError> {
    init_tracing();

    tracing::debug!(terms = DEFAULT_TERMS, "printing series");
    run(&mut io::stdout().lock(), DEFAULT_TERMS)?;

    Ok(())
}
