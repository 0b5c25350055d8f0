/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Normalize: Linearly rescale a gradient into `[0, max]`
//!
//! ```text
//! value = max * (value - min) / (max - min)
//! ```
//!
//! where `min` and `max` are taken over the whole grid and
//! the division truncates. When `max == min` the divisor is `1`.
//!
//! By default the range scan starts from `max = 0` and
//! `min = MAX_COLOR_VALUE`, so the range used always covers those two values.
//! Set [`NormalizeOptions::exact_range`] to scan the values alone.
use imageops_core::channel::MAX_COLOR_VALUE;
use imageops_core::log::trace;
use imageops_image::grid::GradientGrid;

use crate::border::BorderPolicy;

/// Options for [`normalize_with_options`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NormalizeOptions {
    /// What happens to columns `0` and `width - 1`
    ///
    /// - [`Skip`](BorderPolicy::Skip): left as they are
    /// - [`LeaveZero`](BorderPolicy::LeaveZero): set to zero
    /// - [`CopyPrevious`](BorderPolicy::CopyPrevious): left as they are from `from_row` on, zero above
    /// - [`Recompute`](BorderPolicy::Recompute): rescaled like every other column
    pub border:      BorderPolicy,
    /// Compute the range from the values only, without the intensity seeds
    pub exact_range: bool
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            border:      BorderPolicy::Skip,
            exact_range: false
        }
    }
}

impl NormalizeOptions {
    /// Options rescaling the border columns too
    #[must_use]
    pub const fn full_borders() -> NormalizeOptions {
        NormalizeOptions {
            border:      BorderPolicy::Recompute,
            exact_range: false
        }
    }
}

/// Normalize `gradient` in place with the default options
///
/// ```
/// use imageops_image::grid::GradientGrid;
/// use imageops_procs::normalize::normalize;
///
/// let mut gradient = GradientGrid::from_rows(vec![vec![0, 40, 0, 0]]).unwrap();
/// normalize(&mut gradient);
///
/// assert_eq!(gradient.row(0), [0, 40, 0, 0]);
/// ```
pub fn normalize(gradient: &mut GradientGrid) {
    normalize_with_options(gradient, NormalizeOptions::default());
}

/// Normalize `gradient` in place
///
/// Every rescaled value lies in `[0, max]`, which is not necessarily
/// `[0, 255]`.
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_with_options(gradient: &mut GradientGrid, options: NormalizeOptions) {
    let (min, max) = value_range(gradient, options.exact_range);

    let mut diff = i64::from(max) - i64::from(min);

    if diff == 0 {
        diff = 1;
    }
    trace!("Normalizing with min {} max {} divisor {}", min, max, diff);

    let max_wide = i64::from(max);
    let min_wide = i64::from(min);

    // min <= value <= max, the result fits in [0, max]
    let rescale = |value: i32| -> i32 { (max_wide * (i64::from(value) - min_wide) / diff) as i32 };

    let width = gradient.width();

    for (row, values) in gradient.rows_mut().enumerate() {
        if width > 2 {
            for value in &mut values[1..width - 1] {
                *value = rescale(*value);
            }
        }
        let last = width - 1;

        for col in [0, last] {
            values[col] = match options.border {
                BorderPolicy::Skip => values[col],
                BorderPolicy::LeaveZero => 0,
                BorderPolicy::Recompute => rescale(values[col]),
                policy if policy.copies_row(row) => values[col],
                BorderPolicy::CopyPrevious { .. } => 0
            };
            if last == 0 {
                break;
            }
        }
    }
}

fn value_range(gradient: &GradientGrid, exact_range: bool) -> (i32, i32) {
    if exact_range {
        return gradient.min_max();
    }
    gradient
        .values()
        .iter()
        .fold((MAX_COLOR_VALUE, 0), |(min, max), x| (min.min(*x), max.max(*x)))
}
