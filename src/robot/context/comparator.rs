//! Position ordering for contexts
//!
//! Independent recognizers produce their contexts in whatever order suits them. Before the
//! results reach a consumer they are merged and ordered by the file position of each context's
//! first token. Elements without a first token (aggregated contexts, empty synthetic ones) use
//! [SENTINEL_POSITION], which sorts before every real position.

use crate::robot::lexing::FilePosition;
use std::cmp::Ordering;

/// Position key used for elements without a usable first token
pub const SENTINEL_POSITION: (i64, i64) = (-1, -1);

/// Anything that can report where its first token starts
pub trait Positioned {
    fn first_position(&self) -> Option<FilePosition>;

    /// `(line, column)` of the first token, or [SENTINEL_POSITION]
    fn position_key(&self) -> (i64, i64) {
        match self.first_position() {
            Some(position) => (position.line as i64, position.column as i64),
            None => SENTINEL_POSITION,
        }
    }
}

/// Compare two elements by the position of their first token
///
/// Equal positions compare equal.
pub fn compare_by_position<A, B>(a: &A, b: &B) -> Ordering
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    a.position_key().cmp(&b.position_key())
}

/// Stable sort by position; elements at equal positions keep their input order
pub fn sort_by_position<T: Positioned>(elements: &mut [T]) {
    elements.sort_by(|a, b| compare_by_position(a, b));
}
