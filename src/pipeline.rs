//! Lazy map / filter / flat-map adapters and a left fold.
//!
//! Every adapter holds its source iterator and pulls one element per `next()`
//! call, so nothing is computed until the result is consumed. Adapters derive
//! `Clone` whenever their source and closure do, which makes a pipeline over a
//! restartable source (a slice iterator, a range) restartable as well.

use std::fmt;

use crate::error::{CombinatorError, Result};

// =============================================================================
// Milestone 1: Lazy adapters
// =============================================================================

#[derive(Debug, Clone)]
pub struct MapSeq<I, F> {
    iter: I,
    transform: F,
}

impl<I, B, F> Iterator for MapSeq<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.transform)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[derive(Debug, Clone)]
pub struct FilterSeq<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Iterator for FilterSeq<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

pub struct FlatMapSeq<I, U: IntoIterator, F> {
    iter: I,
    f: F,
    front: Option<U::IntoIter>,
}

impl<I, U, F> Clone for FlatMapSeq<I, U, F>
where
    I: Clone,
    U: IntoIterator,
    U::IntoIter: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        FlatMapSeq {
            iter: self.iter.clone(),
            f: self.f.clone(),
            front: self.front.clone(),
        }
    }
}

impl<I, U, F> fmt::Debug for FlatMapSeq<I, U, F>
where
    I: fmt::Debug,
    U: IntoIterator,
    U::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMapSeq")
            .field("iter", &self.iter)
            .field("front", &self.front)
            .finish_non_exhaustive()
    }
}

impl<I, U, F> Iterator for FlatMapSeq<I, U, F>
where
    I: Iterator,
    U: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = self.front.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.front = None;
            }
            let outer = self.iter.next()?;
            self.front = Some((self.f)(outer).into_iter());
        }
    }

    /// Exact only once the outer source is drained; until then each pending
    /// outer item may expand to any number of elements.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (front_lo, front_hi) = self
            .front
            .as_ref()
            .map_or((0, Some(0)), |inner| inner.size_hint());
        match self.iter.size_hint() {
            (0, Some(0)) => (front_lo, front_hi),
            _ => (front_lo, None),
        }
    }
}

pub fn map_seq<S, B, F>(seq: S, transform: F) -> MapSeq<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> B,
{
    MapSeq {
        iter: seq.into_iter(),
        transform,
    }
}

pub fn filter_seq<S, P>(seq: S, predicate: P) -> FilterSeq<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    FilterSeq {
        iter: seq.into_iter(),
        predicate,
    }
}

pub fn flat_map_seq<S, U, F>(seq: S, f: F) -> FlatMapSeq<S::IntoIter, U, F>
where
    S: IntoIterator,
    U: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    FlatMapSeq {
        iter: seq.into_iter(),
        f,
        front: None,
    }
}

// =============================================================================
// Milestone 2: Left fold
// =============================================================================

/// Folds `seq` left to right, starting from `seed`. An empty sequence returns
/// `seed` untouched.
pub fn fold<S, R, F>(seq: S, seed: R, mut combine: F) -> R
where
    S: IntoIterator,
    F: FnMut(R, S::Item) -> R,
{
    let mut acc = seed;
    for item in seq {
        acc = combine(acc, item);
    }
    acc
}

// =============================================================================
// Milestone 3: Chaining through an extension trait
// =============================================================================

pub trait SeqExt: Iterator + Sized {
    fn map_seq<B, F>(self, transform: F) -> MapSeq<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        map_seq(self, transform)
    }

    fn filter_seq<P>(self, predicate: P) -> FilterSeq<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        filter_seq(self, predicate)
    }

    fn flat_map_seq<U, F>(self, f: F) -> FlatMapSeq<Self, U, F>
    where
        U: IntoIterator,
        F: FnMut(Self::Item) -> U,
    {
        flat_map_seq(self, f)
    }

    fn fold_seq<R, F>(self, seed: R, combine: F) -> R
    where
        F: FnMut(R, Self::Item) -> R,
    {
        fold(self, seed, combine)
    }
}

impl<I: Iterator> SeqExt for I {}

// =============================================================================
// Milestone 4: Reductions built on fold
// =============================================================================

/// Largest element, or `seed` if nothing exceeds it.
pub fn max_with_seed<S, T>(seq: S, seed: T) -> T
where
    S: IntoIterator<Item = T>,
    T: PartialOrd,
{
    fold(seq, seed, |best, x| if best > x { best } else { x })
}

/// Joins words with `sep` between them; no leading or trailing separator.
pub fn join_with<S>(seq: S, sep: &str) -> String
where
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    fold(seq, String::new(), |mut acc, word| {
        if !acc.is_empty() {
            acc.push_str(sep);
        }
        acc.push_str(word.as_ref());
        acc
    })
}

/// Fails with `InvalidArgument` instead of overflowing `i64`.
pub fn sum_of_odd_squares<S>(seq: S) -> Result<i64>
where
    S: IntoIterator<Item = i64>,
{
    seq.into_iter()
        .filter_seq(|x| x.rem_euclid(2) == 1)
        .map_seq(|x| x.checked_mul(x))
        .try_fold(0i64, |acc, square| square.and_then(|sq| acc.checked_add(sq)))
        .ok_or_else(|| {
            CombinatorError::invalid_argument("seq", "sum of odd squares overflows i64")
        })
}
