//! The counting sequence workload

use std::iter::FusedIterator;

/// A lazy, finite sequence of the integers from 1 to an inclusive upper bound
///
/// The cursor advances by one per call to [`Iterator::next`] and the sequence
/// is permanently exhausted once the cursor has moved past the limit. A
/// non-positive limit is not an error: the sequence is exhausted from the
/// start and produces zero values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingSequence {
    current: i64,
    limit: i64,
}

impl CountingSequence {
    /// The limit used by [`CountingSequence::default`] and the `count-seq` binary
    pub const DEFAULT_LIMIT: i64 = 10_000;

    /// Create a new `CountingSequence` counting from 1 to `limit` inclusive
    ///
    /// The `limit` is used as is without any validation.
    pub fn new(limit: i64) -> Self {
        Self { current: 1, limit }
    }

    /// Return the inclusive upper bound of this sequence
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for CountingSequence {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

impl Iterator for CountingSequence {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.limit {
            return None;
        }

        let value = self.current;
        self.current += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .limit
            .checked_sub(self.current)
            .and_then(|diff| usize::try_from(diff + 1).ok())
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CountingSequence {}

impl FusedIterator for CountingSequence {}
