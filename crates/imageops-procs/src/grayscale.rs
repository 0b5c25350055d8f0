/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Luminance based grayscale conversion
//!
//! Each pixel is replaced by its weighted luminance
//!
//! ```text
//! y = 0.2126 * r + 0.7152 * g + 0.722 * b
//! ```
//!
//! truncated towards zero and written to all three channels.
//!
//! The blue weight is `0.722`, so the weights add up to `1.6498`
//! and bright pixels land above [`MAX_COLOR_VALUE`](imageops_core::channel::MAX_COLOR_VALUE).
//! Values are not clamped, existing outputs depend on the exact weights.
use imageops_core::channel::Pixel;
use imageops_image::errors::ImageErrors;
use imageops_image::grid::PixelGrid;
use imageops_image::traits::OperationsTrait;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.722;

/// Convert an image to grayscale
#[derive(Default, Copy, Clone, Debug)]
pub struct Grayscale;

impl Grayscale {
    /// Create a new grayscale operation
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut PixelGrid) -> Result<(), ImageErrors> {
        image
            .pixels_mut()
            .iter_mut()
            .for_each(|pixel| *pixel = luminance(*pixel));

        Ok(())
    }
}

/// Luminance of one pixel, replicated into all three channels
///
/// ```
/// use imageops_procs::grayscale::luminance;
///
/// assert_eq!(luminance([100, 100, 100]), [164, 164, 164]);
/// assert_eq!(luminance([0, 0, 0]), [0, 0, 0]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn luminance(pixel: Pixel) -> Pixel {
    let [r, g, b] = pixel;

    let y = (RED_WEIGHT * f64::from(r)) + (GREEN_WEIGHT * f64::from(g)) + (BLUE_WEIGHT * f64::from(b));
    let y = y as i32;

    [y, y, y]
}

/// Return a grayscale copy of `image`, the input is left untouched
#[must_use]
pub fn grayscale(image: &PixelGrid) -> PixelGrid {
    let mut output = image.clone();

    output
        .pixels_mut()
        .iter_mut()
        .for_each(|pixel| *pixel = luminance(*pixel));

    output
}

#[cfg(test)]
mod tests {
    use imageops_image::grid::PixelGrid;
    use imageops_image::traits::OperationsTrait;
    use nanorand::Rng;

    use crate::grayscale::{grayscale, luminance, Grayscale};

    #[test]
    fn weights_are_applied_in_order() {
        // 0.2126*10 + 0.7152*20 + 0.722*30 = 2.126 + 14.304 + 21.66
        assert_eq!(luminance([10, 20, 30]), [38, 38, 38]);
        assert_eq!(luminance([255, 0, 0]), [54, 54, 54]);
        assert_eq!(luminance([0, 255, 0]), [182, 182, 182]);
        assert_eq!(luminance([0, 0, 255]), [184, 184, 184]);
        // not clamped
        assert_eq!(luminance([255, 255, 255]), [420, 420, 420]);
    }

    #[test]
    fn input_is_not_modified() {
        let image = PixelGrid::fill([10, 20, 30], 3, 2).unwrap();
        let gray = grayscale(&image);

        assert_eq!(image.get(1, 2), [10, 20, 30]);
        assert_eq!(gray.get(1, 2), [38, 38, 38]);
        assert_eq!(gray.dimensions(), image.dimensions());
    }

    #[test]
    fn single_pixel() {
        let image = PixelGrid::fill([1, 1, 1], 1, 1).unwrap();
        assert_eq!(grayscale(&image).get(0, 0), [1, 1, 1]);
    }

    #[test]
    fn channels_are_equal() {
        let mut data = vec![0_u8; 17 * 11 * 3];
        nanorand::WyRand::new().fill(&mut data);

        let data: Vec<i32> = data.iter().map(|x| i32::from(*x)).collect();
        let image = PixelGrid::from_raw(&data, 17, 11).unwrap();

        for [r, g, b] in grayscale(&image).pixels() {
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn operation_matches_function() {
        let image = PixelGrid::from_rows(vec![vec![[3, 90, 200], [255, 17, 4]]]).unwrap();
        let mut in_place = image.clone();

        Grayscale::new().execute(&mut in_place).unwrap();

        assert_eq!(in_place, grayscale(&image));
    }
}
