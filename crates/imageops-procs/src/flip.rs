/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: Flip an image by reflecting pixels around an axis.
//!
use imageops_image::errors::ImageErrors;
use imageops_image::grid::PixelGrid;
use imageops_image::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,

    /// Flip the image vertically, reversing the order of rows
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    ///
    Vertical
}

/// Flip an image to a certain direction
#[derive(Copy, Clone, Debug)]
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        match self.flip_direction {
            FlipDirection::Horizontal => "Flip horizontal",
            FlipDirection::Vertical => "Flip vertical"
        }
    }

    fn execute_impl(&self, image: &mut PixelGrid) -> Result<(), ImageErrors> {
        match self.flip_direction {
            FlipDirection::Horizontal => flip_horizontal(image),
            FlipDirection::Vertical => flip_vertical(image)
        }
        Ok(())
    }
}

/// Mirror every row of the image in place
pub fn flip_horizontal(image: &mut PixelGrid) {
    let width = image.width();
    flop(image.pixels_mut(), width);
}

/// Reverse the order of the rows of the image in place
pub fn flip_vertical(image: &mut PixelGrid) {
    let width = image.width();
    vertical_flip(image.pixels_mut(), width);
}

/// Flip an image on the vertical axis
///
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
pub fn vertical_flip<T: Copy + Default>(channel: &mut [T], width: usize) {
    // The middle row of an odd height image is in the bottom
    // half and is never paired, so it stays in place
    let len = channel.len();

    let (top, bottom) = channel.split_at_mut((len / width / 2) * width);

    let mut stride = vec![T::default(); width];
    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        stride.copy_from_slice(t);
        t.copy_from_slice(b);
        b.copy_from_slice(&stride);
    }
}

/// Flop an image
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
///
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        let (left_to_right, right_to_left) = width_chunks.split_at_mut(width / 2);

        // iterate and swap
        for (ltr, rtl) in left_to_right.iter_mut().zip(right_to_left.iter_mut().rev()) {
            std::mem::swap(ltr, rtl);
        }
    }
}
