//! Range helpers.

use crate::option::BoolExt;

// BEGIN SNIPPET range DEPENDS ON option

pub trait UsizeRangeBoundsExt {
    /// Gets a concrete range on a collection of length `len`.
    fn to_range(&self, len: usize) -> Option<std::ops::Range<usize>>;
}

// END SNIPPET

#[cfg(test)]
mod tests {}
