//! Iterative Fibonacci over fixed-width integers.
//!
//! `fib` mirrors a plain 32-bit C loop: additions wrap on overflow and
//! inputs `n <= 1` are returned unchanged. `checked_fib` is the variant
//! that reports both of those cases instead.

use thiserror::Error;

/// Largest index whose Fibonacci number fits in an `i32`.
pub const MAX_I32_INDEX: i32 = 46;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FibError {
    #[error("fibonacci is not defined for negative index {0}")]
    Negative(i32),
    #[error("fib({0}) does not fit in 32 bits")]
    Overflow(i32),
}

/// Computes the `n`'th fibonacci number, 0-indexed with `fib(0) = 0`.
///
/// Overflow wraps at 32 bits, so `fib(47)` is negative. Negative `n` is
/// returned as is.
pub fn fib(n: i32) -> i32 {
    if n <= 1 {
        return n;
    }

    let mut a: i32 = 0;
    let mut b: i32 = 1;
    for _ in 2..=n {
        // Naturally overflow at 32 bits
        let c = a.wrapping_add(b);
        a = b;
        b = c;
    }

    b
}

pub fn checked_fib(n: i32) -> Result<i32, FibError> {
    if n < 0 {
        return Err(FibError::Negative(n));
    }
    if n > MAX_I32_INDEX {
        return Err(FibError::Overflow(n));
    }
    Ok(fib(n))
}

/// Same loop as [`fib`] over `u64`, for the benchmark inputs.
pub fn fib_u64(n: u64) -> u64 {
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for _ in 0..n {
        let c = a.wrapping_add(b);
        a = b;
        b = c;
    }

    a
}
