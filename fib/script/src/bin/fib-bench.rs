use fastfib_program::fastfib;
use fib_program::fib_u64;
use fib_script::{env_or, init_tracing, ScriptError, Stats};
use std::time::Instant;

fn main() -> Result<(), ScriptError> {
    init_tracing();

    let n = env_or("FIB_ARG", 100000u64)?;
    tracing::info!(n, "running benchmarks");

    // loop
    let it = Instant::now();
    let res = fib_u64(n);
    let fib_secs = it.elapsed().as_secs_f32();

    // matrix exponentiation
    let it = Instant::now();
    let fast_res = fastfib(n);
    let fastfib_secs = it.elapsed().as_secs_f32();

    if res != fast_res {
        return Err(ScriptError::Mismatch {
            n,
            fib: res,
            fastfib: fast_res,
        });
    }

    eprintln!("fib({n}) = {res}");

    for stats in [
        Stats {
            program: "fib",
            n,
            result: res,
            compute_secs: fib_secs,
        },
        Stats {
            program: "fastfib",
            n,
            result: fast_res,
            compute_secs: fastfib_secs,
        },
    ] {
        println!("{}", serde_json::to_string(&stats)?);
    }

    Ok(())
}
