/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Horizontal intensity gradient
//!
//! For a grayscale image the gradient at `(row, col)` is the
//! central difference of the green channel
//!
//! ```text
//! g(row, col) = green(row, col + 1) - green(row, col - 1)
//! ```
//!
//! Values are signed and unbounded, see [`normalize`](crate::normalize)
//! to bring them back into an intensity range.
use imageops_core::channel::{Channel, Pixel};
use imageops_image::grid::{GradientGrid, PixelGrid};

use crate::border::BorderPolicy;

const GREEN: usize = Channel::Green.index();

/// Border handling for [`horizontal_gradient_with_options`]
///
/// - [`LeaveZero`](BorderPolicy::LeaveZero) and [`Skip`](BorderPolicy::Skip): the border is zero
/// - [`CopyPrevious`](BorderPolicy::CopyPrevious): the border holds the source green channel
/// - [`Recompute`](BorderPolicy::Recompute): a one sided difference with the inner neighbour
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GradientOptions {
    /// Policy of column `0`
    pub left:  BorderPolicy,
    /// Policy of column `width - 1`
    pub right: BorderPolicy
}

impl Default for GradientOptions {
    fn default() -> Self {
        GradientOptions {
            left:  BorderPolicy::LeaveZero,
            right: BorderPolicy::LeaveZero
        }
    }
}

impl GradientOptions {
    /// Options computing one sided differences on both border columns
    #[must_use]
    pub const fn full_borders() -> GradientOptions {
        GradientOptions {
            left:  BorderPolicy::Recompute,
            right: BorderPolicy::Recompute
        }
    }
}

/// Horizontal gradient of `image` with zero border columns
///
/// ```
/// use imageops_image::grid::PixelGrid;
/// use imageops_procs::gradient::horizontal_gradient;
///
/// let gray = PixelGrid::from_rows(vec![vec![[10; 3], [10; 3], [50; 3], [10; 3]]]).unwrap();
///
/// assert_eq!(horizontal_gradient(&gray).row(0), [0, 40, 0, 0]);
/// ```
#[must_use]
pub fn horizontal_gradient(image: &PixelGrid) -> GradientGrid {
    horizontal_gradient_with_options(image, GradientOptions::default())
}

/// Horizontal gradient of `image`, border columns follow `options`
///
/// Only the green channel is read, so the input is expected to be grayscale.
#[must_use]
pub fn horizontal_gradient_with_options(
    image: &PixelGrid, options: GradientOptions
) -> GradientGrid {
    let width = image.width();
    let mut output = GradientGrid::zeroed_like(image);

    for (row, (src, out)) in image.rows().zip(output.rows_mut()).enumerate() {
        for (window, value) in src.windows(3).zip(out.iter_mut().skip(1)) {
            *value = window[2][GREEN] - window[0][GREEN];
        }

        let last = width - 1;

        if width > 1 {
            out[last] = border_value(src, row, last, options.right);
        }
        // a single column is both borders, the left one wins
        out[0] = border_value(src, row, 0, options.left);
    }
    output
}

fn border_value(src: &[Pixel], row: usize, col: usize, policy: BorderPolicy) -> i32 {
    match policy {
        BorderPolicy::Recompute => one_sided_difference(src, col),
        policy if policy.copies_row(row) => src[col][GREEN],
        _ => 0
    }
}

fn one_sided_difference(src: &[Pixel], col: usize) -> i32 {
    if src.len() < 2 {
        return 0;
    }
    if col == 0 {
        src[1][GREEN] - src[0][GREEN]
    } else {
        src[col][GREEN] - src[col - 1][GREEN]
    }
}
