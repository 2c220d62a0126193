use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};

use crate::error::{CombinatorError, Result};

/// What to do when the two inputs of a zip-combine differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZipPolicy {
    /// Fail with `LengthMismatch`. Both inputs must be finite.
    #[default]
    Strict,
    /// Stop at the end of the shorter input.
    Truncate,
}

/// Combines `left` and `right` element-wise under `policy`.
///
/// `combine` runs once per output position, in source order. Under
/// `ZipPolicy::Strict` the remainder of the longer input is drained to report
/// both lengths in the error.
pub fn zip_combine<A, B, R, F>(
    left: A,
    right: B,
    mut combine: F,
    policy: ZipPolicy,
) -> Result<Vec<R>>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    let mut combined = Vec::new();
    let mut pairs = left.into_iter().zip_longest(right);

    while let Some(pair) = pairs.next() {
        let left_is_longer = match pair {
            EitherOrBoth::Both(a, b) => {
                combined.push(combine(a, b));
                continue;
            }
            EitherOrBoth::Left(_) => true,
            EitherOrBoth::Right(_) => false,
        };

        let side = if left_is_longer { "left" } else { "right" };
        match policy {
            ZipPolicy::Truncate => {
                log::warn!(
                    "zip truncated after {} pairs; dropping the rest of the {side} input",
                    combined.len()
                );
                return Ok(combined);
            }
            ZipPolicy::Strict => {
                let shorter = combined.len();
                let longer = shorter + 1 + pairs.count();
                return Err(if left_is_longer {
                    CombinatorError::length_mismatch(longer, shorter)
                } else {
                    CombinatorError::length_mismatch(shorter, longer)
                });
            }
        }
    }

    Ok(combined)
}

// =============================================================================
// Lazy truncating form
// =============================================================================

#[derive(Debug, Clone)]
pub struct ZipCombine<A, B, F> {
    left: A,
    right: B,
    combine: F,
}

impl<A, B, R, F> Iterator for ZipCombine<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let a = self.left.next()?;
        let b = self.right.next()?;
        Some((self.combine)(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lo, left_hi) = self.left.size_hint();
        let (right_lo, right_hi) = self.right.size_hint();
        let upper = match (left_hi, right_hi) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (Some(l), None) => Some(l),
            (None, Some(r)) => Some(r),
            (None, None) => None,
        };
        (left_lo.min(right_lo), upper)
    }
}

/// Lazy zip-combine that ends with the shorter input. Works with unbounded
/// sources as long as one side is finite.
pub fn zip_truncate<A, B, R, F>(
    left: A,
    right: B,
    combine: F,
) -> ZipCombine<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    ZipCombine {
        left: left.into_iter(),
        right: right.into_iter(),
        combine,
    }
}
