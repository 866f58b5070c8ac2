//! # Sequence Evaluation
//!
//! Nth-term evaluation and prefix generation.
//!
//! Both paths use the iterative recurrence and wrap on overflow, so
//! `sequence_prefix(n)[i] == nth_term(i)` holds for every `i`, in range or not.

use crate::{FibonacciError, Result};
use tracing::{debug, trace};

/// Largest index whose term fits in a `u64`.
///
/// F(93) = 12200160415121876738, F(94) no longer fits.
pub const MAX_INDEX: u32 = 93;

/// F(0)..=F(20), evaluated at compile time.
pub const FIBONACCI_20: [u64; 21] = sequence_array::<21>();

/// Calculates the nth Fibonacci number.
///
/// Usable in `const` contexts and at runtime with identical results.
/// For `n > MAX_INDEX` the result wraps modulo 2^64.
pub const fn nth_term(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    let mut i = 0;
    while i < n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
        i += 1;
    }
    a
}

/// Like [`nth_term`], but reports overflow instead of wrapping.
pub fn checked_nth_term(n: u32) -> Result<u64> {
    if n > MAX_INDEX {
        debug!(index = n, max = MAX_INDEX, "Rejecting overflowing index");
        return Err(FibonacciError::Overflow {
            index: n,
            max: MAX_INDEX,
        });
    }
    Ok(nth_term(n))
}

/// Fixed-size array of the first `LEN` terms, F(0)..F(LEN-1).
///
/// Unlike [`sequence_prefix`], `LEN` is the element count, not the last index.
pub const fn sequence_array<const LEN: usize>() -> [u64; LEN] {
    let mut out = [0u64; LEN];
    let (mut a, mut b) = (0u64, 1u64);
    let mut i = 0;
    while i < LEN {
        out[i] = a;
        let next = a.wrapping_add(b);
        a = b;
        b = next;
        i += 1;
    }
    out
}

/// Returns `[F(0), F(1), ..., F(count)]`, so the length is `count + 1`.
pub fn sequence_prefix(count: u32) -> Vec<u64> {
    if count > MAX_INDEX {
        trace!(count, "Prefix extends past MAX_INDEX, tail will wrap");
    }

    let len = count as usize + 1;
    let mut out = Vec::with_capacity(len);
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..len {
        out.push(a);
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    out
}
