/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A 3x3 neighbourhood average blur
//!
//! Every recomputed pixel becomes, per channel, the truncated mean of the
//! pixels in its 3x3 neighbourhood that lie inside the image. The divisor
//! is the number of such pixels, 9 inside the image, 6 along an edge
//! and 4 in a corner.
//!
//! # Borders
//! Inner columns are recomputed on every row, the first and the last
//! column follow the [`BorderPolicy`] set in [`BlurOptions`].
//!
//! The default options keep the long standing output of this filter:
//!
//! - the first column is left at zero
//! - the last column copies the source from the second row on, so its first row is zero
//!
//! ```text
//! source          blurred (red channel)
//! ┌──────────┐    ┌──────────┐
//! │10  20  30│    │ 0  35   0│
//! │40  50  60│    │ 0  50  60│
//! │70  80  90│    │ 0  65  90│
//! └──────────┘    └──────────┘
//! ```
//!
//! Use [`BlurOptions::full_borders`] to average the border columns too.
use imageops_core::channel::{Channel, Pixel, NUM_OF_COLORS};
use imageops_core::log::trace;
use imageops_image::errors::ImageErrors;
use imageops_image::grid::PixelGrid;
use imageops_image::traits::OperationsTrait;

use crate::border::BorderPolicy;

/// Border handling for [`blur_with_options`]
///
/// Both [`LeaveZero`](BorderPolicy::LeaveZero) and [`Skip`](BorderPolicy::Skip)
/// leave the border at zero since the output starts zero filled.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BlurOptions {
    /// Policy of column `0`
    pub left:  BorderPolicy,
    /// Policy of column `width - 1`
    pub right: BorderPolicy
}

impl Default for BlurOptions {
    fn default() -> Self {
        BlurOptions {
            left:  BorderPolicy::LeaveZero,
            right: BorderPolicy::CopyPrevious { from_row: 1 }
        }
    }
}

impl BlurOptions {
    /// Options recomputing both border columns from their in-bounds neighbours
    #[must_use]
    pub const fn full_borders() -> BlurOptions {
        BlurOptions {
            left:  BorderPolicy::Recompute,
            right: BorderPolicy::Recompute
        }
    }

    fn policy_for(&self, col: usize, width: usize) -> Option<BorderPolicy> {
        // a single column is both borders, the left one wins
        if col == 0 {
            Some(self.left)
        } else if col + 1 == width {
            Some(self.right)
        } else {
            None
        }
    }
}

/// Blur an image with a 3x3 neighbourhood average
#[derive(Default, Copy, Clone, Debug)]
pub struct Blur {
    options: BlurOptions
}

impl Blur {
    /// Create a new blur operation
    #[must_use]
    pub fn new(options: BlurOptions) -> Blur {
        Blur { options }
    }
}

impl OperationsTrait for Blur {
    fn name(&self) -> &'static str {
        "Blur"
    }

    fn execute_impl(&self, image: &mut PixelGrid) -> Result<(), ImageErrors> {
        *image = blur_with_options(image, self.options);
        Ok(())
    }
}

/// Blur `image` with the default border handling
///
/// See the [module documentation](self) for what happens on the borders
#[must_use]
pub fn blur(image: &PixelGrid) -> PixelGrid {
    blur_with_options(image, BlurOptions::default())
}

/// Blur `image`, treating the border columns as `options` says
///
/// The input is left untouched and a new grid of the same
/// dimensions is returned.
///
/// ```
/// use imageops_image::grid::PixelGrid;
/// use imageops_procs::blur::{blur_with_options, BlurOptions};
///
/// let image = PixelGrid::fill([90, 90, 90], 4, 3).unwrap();
/// let blurred = blur_with_options(&image, BlurOptions::full_borders());
///
/// assert_eq!(blurred, image);
/// ```
#[must_use]
pub fn blur_with_options(image: &PixelGrid, options: BlurOptions) -> PixelGrid {
    let (width, height) = image.dimensions();
    let mut output = image.zeroed_like();

    trace!("Blurring a {}x{} image with {:?}", width, height, options);

    for row in 0..height {
        for col in 0..width {
            let value = match options.policy_for(col, width) {
                None | Some(BorderPolicy::Recompute) => neighbourhood_mean(image, row, col),
                Some(policy) if policy.copies_row(row) => image.get(row, col),
                Some(_) => continue
            };
            *output.get_mut(row, col) = value;
        }
    }
    output
}

/// Per channel mean of the in-bounds pixels around `(row, col)`
fn neighbourhood_mean(image: &PixelGrid, row: usize, col: usize) -> Pixel {
    let mut mean = [0; NUM_OF_COLORS];

    for (out, channel) in mean.iter_mut().zip(Channel::ALL) {
        *out = channel_mean(image, row, col, channel);
    }
    mean
}

#[allow(clippy::cast_possible_truncation)]
fn channel_mean(image: &PixelGrid, row: usize, col: usize, channel: Channel) -> i32 {
    let mut sum = 0_i64;
    let mut count = 0_i64;

    for row_offset in -1..=1_isize {
        for col_offset in -1..=1_isize {
            let neighbour = row
                .checked_add_signed(row_offset)
                .zip(col.checked_add_signed(col_offset))
                .and_then(|(r, c)| image.try_channel(r, c, channel));

            if let Some(value) = neighbour {
                sum += i64::from(value);
                count += 1;
            }
        }
    }
    // the center is always in bounds, so count is at least 1
    (sum / count) as i32
}

#[cfg(test)]
mod tests {
    use imageops_image::grid::PixelGrid;
    use imageops_image::traits::OperationsTrait;

    use crate::blur::{blur, blur_with_options, Blur, BlurOptions};
    use crate::border::BorderPolicy;

    fn red(rows: &[&[i32]]) -> PixelGrid {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|x| [*x, 0, 0]).collect::<Vec<_>>())
            .collect();
        PixelGrid::from_rows(rows).unwrap()
    }

    fn red_channel(image: &PixelGrid) -> Vec<Vec<i32>> {
        image
            .rows()
            .map(|row| row.iter().map(|x| x[0]).collect())
            .collect()
    }

    #[test]
    fn center_of_three_by_three() {
        let image = red(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]);

        assert_eq!(blur(&image).get(1, 1), [50, 0, 0]);
    }

    #[test]
    fn legacy_borders() {
        let image = red(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]);

        assert_eq!(
            red_channel(&blur(&image)),
            [[0, 35, 0], [0, 50, 60], [0, 65, 90]]
        );
    }

    #[test]
    fn full_borders_use_exact_divisors() {
        let image = red(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]);
        let blurred = blur_with_options(&image, BlurOptions::full_borders());

        // corners divide by 4, edges by 6
        assert_eq!(
            red_channel(&blurred),
            [[30, 35, 40], [45, 50, 55], [60, 65, 70]]
        );
    }

    #[test]
    fn uniform_image() {
        let image = PixelGrid::fill([100, 100, 100], 5, 4).unwrap();
        let blurred = blur(&image);

        for row in 0..4 {
            for col in 1..4 {
                assert_eq!(blurred.get(row, col), [100, 100, 100]);
            }
            assert_eq!(blurred.get(row, 0), [0, 0, 0]);
        }
        assert_eq!(blurred.get(0, 4), [0, 0, 0]);
        assert_eq!(blurred.get(1, 4), [100, 100, 100]);
        assert_eq!(blurred.get(3, 4), [100, 100, 100]);

        assert_eq!(blur_with_options(&image, BlurOptions::full_borders()), image);
    }

    #[test]
    fn mean_is_truncated() {
        let image = red(&[&[1, 2, 2]]);

        // (1 + 2 + 2) / 3
        assert_eq!(blur(&image).get(0, 1), [1, 0, 0]);
    }

    #[test]
    fn single_column_follows_left_policy() {
        let image = red(&[&[10], &[20], &[30]]);

        assert_eq!(red_channel(&blur(&image)), [[0], [0], [0]]);

        let blurred = blur_with_options(&image, BlurOptions::full_borders());
        assert_eq!(red_channel(&blurred), [[15], [20], [25]]);
    }

    #[test]
    fn copy_previous_on_both_sides() {
        let image = red(&[&[1, 2, 3, 4], &[5, 6, 7, 8], &[9, 10, 11, 12]]);
        let options = BlurOptions {
            left:  BorderPolicy::CopyPrevious { from_row: 0 },
            right: BorderPolicy::CopyPrevious { from_row: 2 }
        };
        let blurred = red_channel(&blur_with_options(&image, options));

        assert_eq!(blurred[0][0], 1);
        assert_eq!(blurred[2][0], 9);
        assert_eq!(blurred[1][3], 0);
        assert_eq!(blurred[2][3], 12);
    }

    #[test]
    fn skip_matches_leave_zero() {
        let image = red(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]);
        let skip = BlurOptions {
            left:  BorderPolicy::Skip,
            right: BorderPolicy::Skip
        };
        let zero = BlurOptions {
            left:  BorderPolicy::LeaveZero,
            right: BorderPolicy::LeaveZero
        };

        assert_eq!(blur_with_options(&image, skip), blur_with_options(&image, zero));
        assert_eq!(
            red_channel(&blur_with_options(&image, skip)),
            [[0, 35, 0], [0, 50, 0], [0, 65, 0]]
        );
    }

    #[test]
    fn input_is_untouched() {
        let image = red(&[&[10, 20, 30], &[40, 50, 60]]);
        let copy = image.clone();

        let _ = blur(&image);
        assert_eq!(image, copy);
    }

    #[test]
    fn operation_replaces_image() {
        let image = red(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]);
        let mut in_place = image.clone();

        Blur::default().execute(&mut in_place).unwrap();

        assert_eq!(in_place, blur(&image));
    }
}
