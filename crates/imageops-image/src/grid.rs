/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Rectangular grids of pixels and of signed scalars
//!
//! Both grids are dense and row-major. A grid can only be
//! constructed with non-zero dimensions and a buffer whose length
//! matches them, so every grid handed to an operation is rectangular.
//!
//! Intensities are stored as `i32`, in `[0, 255]` under normal use.
//! Nothing clamps on write; routines that can leave that range
//! say so in their documentation.
use core::slice::{ChunksExact, ChunksExactMut};

use imageops_core::channel::{Channel, Pixel, NUM_OF_COLORS};

use crate::errors::ImageErrors;

fn check_dimensions(width: usize, height: usize) -> Result<usize, ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::ZeroDimensions(width, height));
    }
    width
        .checked_mul(height)
        .ok_or(ImageErrors::GenericStr("Image dimensions overflow"))
}

/// An image, `height` rows of `width` pixels with three channels each
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl PixelGrid {
    /// Create a zero filled grid
    ///
    /// # Errors
    /// If either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<PixelGrid, ImageErrors> {
        PixelGrid::fill([0; NUM_OF_COLORS], width, height)
    }

    /// Create a grid where every pixel is `pixel`
    ///
    /// # Errors
    /// If either dimension is zero
    pub fn fill(pixel: Pixel, width: usize, height: usize) -> Result<PixelGrid, ImageErrors> {
        let size = check_dimensions(width, height)?;

        Ok(PixelGrid {
            width,
            height,
            pixels: vec![pixel; size]
        })
    }

    /// Create a grid from pixels stored row by row
    ///
    /// # Errors
    /// If either dimension is zero or `pixels.len()` is not `width * height`
    pub fn from_pixels(
        pixels: Vec<Pixel>, width: usize, height: usize
    ) -> Result<PixelGrid, ImageErrors> {
        let size = check_dimensions(width, height)?;

        if pixels.len() != size {
            return Err(ImageErrors::DimensionsMisMatch(size, pixels.len()));
        }
        Ok(PixelGrid {
            width,
            height,
            pixels
        })
    }

    /// Create a grid from interleaved samples, `[R,G,B,R,G,B,...]`
    ///
    /// This is the layout produced by the PPM decoder.
    ///
    /// # Errors
    /// If either dimension is zero or `data.len()` is not `width * height * 3`
    pub fn from_raw(data: &[i32], width: usize, height: usize) -> Result<PixelGrid, ImageErrors> {
        let size = check_dimensions(width, height)?;
        let expected = size * NUM_OF_COLORS;

        if data.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        let pixels = data
            .chunks_exact(NUM_OF_COLORS)
            .map(|x| [x[0], x[1], x[2]])
            .collect();

        Ok(PixelGrid {
            width,
            height,
            pixels
        })
    }

    /// Create a grid from nested rows
    ///
    /// ```
    /// use imageops_image::grid::PixelGrid;
    ///
    /// let grid = PixelGrid::from_rows(vec![vec![[1, 2, 3], [4, 5, 6]]]).unwrap();
    /// assert_eq!(grid.dimensions(), (2, 1));
    ///
    /// assert!(PixelGrid::from_rows(vec![vec![[0; 3]; 2], vec![[0; 3]; 1]]).is_err());
    /// ```
    ///
    /// # Errors
    /// If there are no rows, the first row is empty or rows differ in length
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<PixelGrid, ImageErrors> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        check_dimensions(width, height)?;

        if let Some((pos, row)) = rows.iter().enumerate().find(|(_, x)| x.len() != width) {
            return Err(ImageErrors::RaggedRow(pos, width, row.len()));
        }
        let pixels = rows.into_iter().flatten().collect();

        Ok(PixelGrid {
            width,
            height,
            pixels
        })
    }

    /// A zero filled grid with the same dimensions as this one
    #[must_use]
    pub fn zeroed_like(&self) -> PixelGrid {
        PixelGrid {
            width:  self.width,
            height: self.height,
            pixels: vec![[0; NUM_OF_COLORS]; self.pixels.len()]
        }
    }

    /// Get image dimensions as a tuple of `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the pixel at `(row, col)`
    ///
    /// # Panics
    /// If the coordinates are outside the grid
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        assert!(col < self.width, "Column {col} out of bounds");
        self.pixels[row * self.width + col]
    }

    /// Return a mutable reference to the pixel at `(row, col)`
    ///
    /// # Panics
    /// If the coordinates are outside the grid
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Pixel {
        assert!(col < self.width, "Column {col} out of bounds");
        &mut self.pixels[row * self.width + col]
    }

    /// Return the pixel at `(row, col)` or `None` if it lies outside the grid
    #[must_use]
    pub fn try_get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row < self.height && col < self.width {
            return self.pixels.get(row * self.width + col);
        }
        None
    }

    /// Intensity of one channel of a pixel
    ///
    /// # Panics
    /// If the coordinates are outside the grid
    #[must_use]
    pub fn channel(&self, row: usize, col: usize, channel: Channel) -> i32 {
        self.get(row, col)[channel.index()]
    }

    /// Intensity of one channel of a pixel, or `None` if the pixel
    /// lies outside the grid
    #[must_use]
    pub fn try_channel(&self, row: usize, col: usize, channel: Channel) -> Option<i32> {
        self.try_get(row, col).map(|x| x[channel.index()])
    }

    /// Pixels of row `row`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate over rows of pixels, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width)
    }

    /// Iterate mutably over rows of pixels, top to bottom
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, Pixel> {
        self.pixels.chunks_exact_mut(self.width)
    }

    /// All pixels, row-major
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// All pixels, row-major
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Flatten the grid into interleaved samples `[R,G,B,R,G,B,...]`
    #[must_use]
    pub fn to_interleaved(&self) -> Vec<i32> {
        self.pixels.iter().flatten().copied().collect()
    }
}

/// Signed scalars, one per pixel, e.g. image derivatives
///
/// Values are not bounded to the intensity range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientGrid {
    width:  usize,
    height: usize,
    values: Vec<i32>
}

impl GradientGrid {
    /// Create a zero filled gradient grid
    ///
    /// # Errors
    /// If either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<GradientGrid, ImageErrors> {
        let size = check_dimensions(width, height)?;

        Ok(GradientGrid {
            width,
            height,
            values: vec![0; size]
        })
    }

    /// A zero filled gradient grid matching the dimensions of `grid`
    #[must_use]
    pub fn zeroed_like(grid: &PixelGrid) -> GradientGrid {
        let (width, height) = grid.dimensions();

        GradientGrid {
            width,
            height,
            values: vec![0; width * height]
        }
    }

    /// Create a gradient grid from nested rows
    ///
    /// # Errors
    /// If there are no rows, the first row is empty or rows differ in length
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<GradientGrid, ImageErrors> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        check_dimensions(width, height)?;

        if let Some((pos, row)) = rows.iter().enumerate().find(|(_, x)| x.len() != width) {
            return Err(ImageErrors::RaggedRow(pos, width, row.len()));
        }
        Ok(GradientGrid {
            width,
            height,
            values: rows.into_iter().flatten().collect()
        })
    }

    /// Get dimensions as a tuple of `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// # Panics
    /// If the coordinates are outside the grid
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(col < self.width, "Column {col} out of bounds");
        self.values[row * self.width + col]
    }

    /// # Panics
    /// If the coordinates are outside the grid
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        assert!(col < self.width, "Column {col} out of bounds");
        self.values[row * self.width + col] = value;
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[i32] {
        let start = row * self.width;
        &self.values[start..start + self.width]
    }

    pub fn rows(&self) -> ChunksExact<'_, i32> {
        self.values.chunks_exact(self.width)
    }

    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, i32> {
        self.values.chunks_exact_mut(self.width)
    }

    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    /// Smallest and largest value in the grid
    #[must_use]
    pub fn min_max(&self) -> (i32, i32) {
        self.values
            .iter()
            .fold((i32::MAX, i32::MIN), |(min, max), x| (min.min(*x), max.max(*x)))
    }
}
