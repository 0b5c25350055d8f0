/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Border handling shared by the neighbourhood transforms
//!
//! Blur, gradient and normalization only treat the inner columns
//! uniformly, what happens to the first and the last column is
//! chosen per transform with a [`BorderPolicy`].

/// What a transform does with a border column
///
/// Not every transform gives every policy a distinct meaning,
/// each transform documents how it interprets them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BorderPolicy {
    /// Copy the source value, starting at row `from_row`.
    ///
    /// Rows above `from_row` are left at zero.
    CopyPrevious { from_row: usize },
    /// Write zero to the border
    LeaveZero,
    /// Never touch the border, whatever is already there stays
    Skip,
    /// Compute the border with the same rule as the inner columns,
    /// using only the neighbours that exist
    Recompute
}

impl BorderPolicy {
    /// Whether the border value at `row` is the source value under this policy
    #[must_use]
    pub const fn copies_row(self, row: usize) -> bool {
        match self {
            BorderPolicy::CopyPrevious { from_row } => row >= from_row,
            _ => false
        }
    }
}
