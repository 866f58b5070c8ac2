//! # Sequence Queries
//!
//! Membership and position lookups by forward iteration of the recurrence.
//! Cost is linear in the position of the queried value.

/// Checks if a number is a Fibonacci number.
///
/// `0` and `1` short-circuit to `true`.
pub const fn is_fibonacci(value: u64) -> bool {
    position_of(value).is_some()
}

/// Position of `value` in the sequence, or `None` if it is not a term.
///
/// Returns the smallest matching index, so `1` maps to `Some(1)` even though
/// F(2) is also 1.
pub const fn position_of(value: u64) -> Option<u32> {
    if value <= 1 {
        return Some(value as u32);
    }

    let (mut a, mut b) = (0u64, 1u64);
    let mut position = 1u32;
    while b < value {
        // Nothing lies between F(93) and u64::MAX, so running out of range
        // means the walk has passed the value.
        let next = match a.checked_add(b) {
            Some(next) => next,
            None => return None,
        };
        a = b;
        b = next;
        position += 1;
    }

    if b == value {
        Some(position)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{nth_term, MAX_INDEX};

    #[test]
    fn test_is_fibonacci() {
        assert!(is_fibonacci(0));
        assert!(is_fibonacci(1));
        assert!(is_fibonacci(2));
        assert!(is_fibonacci(55));
        assert!(is_fibonacci(233));
        assert!(!is_fibonacci(4));
        assert!(!is_fibonacci(100));
    }

    #[test]
    fn test_position_of() {
        assert_eq!(position_of(0), Some(0));
        assert_eq!(position_of(1), Some(1));
        assert_eq!(position_of(2), Some(3));
        assert_eq!(position_of(21), Some(8));
        assert_eq!(position_of(55), Some(10));
        assert_eq!(position_of(100), None);
    }

    #[test]
    fn test_upper_range() {
        let largest = nth_term(MAX_INDEX);
        assert_eq!(position_of(largest), Some(MAX_INDEX));
        assert!(!is_fibonacci(largest + 1));
        assert!(!is_fibonacci(u64::MAX));
        assert_eq!(position_of(u64::MAX), None);
    }

    #[test]
    fn test_usable_in_const() {
        const IS_FIB: bool = is_fibonacci(144);
        const POSITION: Option<u32> = position_of(144);
        assert!(IS_FIB);
        assert_eq!(POSITION, Some(12));
    }
}
