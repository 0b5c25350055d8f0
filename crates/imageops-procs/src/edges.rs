/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Horizontal edge detection
//!
//! The detector chains
//!
//! ```text
//! grayscale -> horizontal gradient -> normalize -> broadcast
//! ```
//!
//! and returns an image whose three channels hold the normalized gradient.
//! Images narrower than three columns have no inner columns and produce
//! an all zero result with the default options.
use imageops_core::log::trace;
use imageops_image::errors::ImageErrors;
use imageops_image::grid::{GradientGrid, PixelGrid};
use imageops_image::traits::OperationsTrait;

use crate::gradient::{horizontal_gradient_with_options, GradientOptions};
use crate::grayscale::grayscale;
use crate::normalize::{normalize_with_options, NormalizeOptions};

/// Options of the stages of [`edges_with_options`]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeOptions {
    pub gradient:  GradientOptions,
    pub normalize: NormalizeOptions
}

impl EdgeOptions {
    /// Options computing and rescaling the border columns too
    #[must_use]
    pub const fn full_borders() -> EdgeOptions {
        EdgeOptions {
            gradient:  GradientOptions::full_borders(),
            normalize: NormalizeOptions::full_borders()
        }
    }
}

/// Replace an image with its horizontal edges
#[derive(Default, Copy, Clone, Debug)]
pub struct Edges {
    options: EdgeOptions
}

impl Edges {
    /// Create a new edge detection operation
    #[must_use]
    pub fn new(options: EdgeOptions) -> Edges {
        Edges { options }
    }
}

impl OperationsTrait for Edges {
    fn name(&self) -> &'static str {
        "Edges"
    }

    fn execute_impl(&self, image: &mut PixelGrid) -> Result<(), ImageErrors> {
        *image = edges_with_options(image, self.options)?;
        Ok(())
    }
}

/// Horizontal edges of `image` with the default options
///
/// # Errors
/// Never for a grid built through the [`PixelGrid`] constructors
pub fn edges(image: &PixelGrid) -> Result<PixelGrid, ImageErrors> {
    edges_with_options(image, EdgeOptions::default())
}

/// Horizontal edges of `image`, the input is left untouched
///
/// # Errors
/// Never for a grid built through the [`PixelGrid`] constructors
pub fn edges_with_options(
    image: &PixelGrid, options: EdgeOptions
) -> Result<PixelGrid, ImageErrors> {
    let gray = grayscale(image);
    let mut gradient = horizontal_gradient_with_options(&gray, options.gradient);

    trace!("Gradient range before normalizing: {:?}", gradient.min_max());

    normalize_with_options(&mut gradient, options.normalize);

    broadcast(&gradient)
}

/// Copy every scalar of `gradient` into all three channels of a new image
///
/// # Errors
/// Never for a gradient built through the [`GradientGrid`] constructors
pub fn broadcast(gradient: &GradientGrid) -> Result<PixelGrid, ImageErrors> {
    let (width, height) = gradient.dimensions();
    let pixels = gradient.values().iter().map(|x| [*x; 3]).collect();

    PixelGrid::from_pixels(pixels, width, height)
}
