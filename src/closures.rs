//! Small higher-order helpers: functions that take other functions as arguments.

use crate::error::{CombinatorError, Result};

pub fn string_length(s: &str) -> i64 {
    s.chars().count() as i64
}

/// Integer value of `s`, or 0 when it doesn't parse.
pub fn string_value(s: &str) -> i64 {
    s.parse().unwrap_or(0)
}

pub fn apply_then_increment<F>(function: F, input: &str) -> i64
where
    F: Fn(&str) -> i64,
{
    function(input).saturating_add(1)
}

/// Sum of `f(i)` over the closed range `from..=to`.
pub fn sum_mapped<F>(from: i64, to: i64, f: F) -> Result<i64>
where
    F: Fn(i64) -> i64,
{
    if from > to {
        return Err(CombinatorError::invalid_argument(
            "from",
            format!("range start {from} is past its end {to}"),
        ));
    }
    (from..=to)
        .map(f)
        .try_fold(0i64, |acc, value| acc.checked_add(value))
        .ok_or_else(|| {
            CombinatorError::invalid_argument("f", format!("sum over {from}..={to} overflows i64"))
        })
}

pub fn apply_k_times<F>(k: usize, mut closure: F) -> Result<()>
where
    F: FnMut(),
{
    if k == 0 {
        return Err(CombinatorError::invalid_argument("k", "must be at least 1"));
    }
    for _ in 0..k {
        closure();
    }
    Ok(())
}

pub fn for_each<S, F>(seq: S, mut closure: F)
where
    S: IntoIterator,
    F: FnMut(S::Item),
{
    for item in seq {
        closure(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_class_string_functions() {
        let f1 = string_length;
        let f2 = string_value;

        assert_eq!(apply_then_increment(f1, "123"), 4);
        assert_eq!(apply_then_increment(f2, "123"), 124);
        assert_eq!(apply_then_increment(f2, "abc"), 1);
    }

    #[test]
    fn test_apply_then_increment_saturates() {
        assert_eq!(apply_then_increment(|_| i64::MAX, "x"), i64::MAX);
        assert_eq!(apply_then_increment(string_value, "9223372036854775807"), i64::MAX);
    }

    #[test]
    fn test_string_length_counts_chars() {
        assert_eq!(string_length("héllo"), 5);
        assert_eq!(string_length(""), 0);
    }

    #[test]
    fn test_string_value() {
        assert_eq!(string_value("-42"), -42);
        assert_eq!(string_value(" 7 "), 0);
        assert_eq!(string_value("4.5"), 0);
    }

    #[test]
    fn test_sum_mapped() {
        assert_eq!(sum_mapped(1, 5, |x| x).unwrap(), 15);
        assert_eq!(sum_mapped(1, 3, |x| x * x).unwrap(), 14);
        assert_eq!(sum_mapped(4, 4, |x| x * 10).unwrap(), 40);
    }

    #[test]
    fn test_sum_mapped_rejects_reversed_range() {
        let err = sum_mapped(5, 1, |x| x).unwrap_err();
        assert!(matches!(err, CombinatorError::InvalidArgument { .. }));
    }

    #[test]
    fn test_sum_mapped_overflow_is_an_error() {
        let err = sum_mapped(1, 2, |_| i64::MAX).unwrap_err();
        assert!(matches!(err, CombinatorError::InvalidArgument { ref name, .. } if name == "f"));
        assert_eq!(sum_mapped(1, 1, |_| i64::MAX).unwrap(), i64::MAX);
    }

    #[test]
    fn test_apply_k_times() {
        let mut count = 0;
        apply_k_times(5, || count += 1).unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_apply_k_times_zero_is_invalid() {
        let mut called = false;
        assert!(apply_k_times(0, || called = true).is_err());
        assert!(!called);
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut squares = Vec::new();
        for_each([1, 2, 3, 4, 5], |value| squares.push(value * value));
        assert_eq!(squares, vec![1, 4, 9, 16, 25]);
    }
}
