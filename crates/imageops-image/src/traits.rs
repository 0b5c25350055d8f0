/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits implemented by image sources and image operations
use imageops_core::log::trace;

use crate::errors::ImageErrors;
use crate::grid::PixelGrid;

/// Anything that can produce a [`PixelGrid`]
///
/// Decoders, files on disk and grids themselves implement this
/// so a [`Pipeline`](crate::pipelines::Pipeline) can take any of them.
pub trait IntoImage {
    /// Consume this source and return the image it holds
    ///
    /// # Errors
    /// Any decoding or I/O error of the source
    fn into_image(self) -> Result<PixelGrid, ImageErrors>;
}

impl IntoImage for PixelGrid {
    fn into_image(self) -> Result<PixelGrid, ImageErrors> {
        Ok(self)
    }
}

/// This encapsulates an image operation.
///
/// All operations that can be stored in a pipeline
/// need to implement this trait.
///
/// Operations receive exclusive access to the image; an operation
/// that produces a new grid replaces the image with it.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image
    ///
    /// This is what implementors provide, callers should use
    /// [`execute`](OperationsTrait::execute), which also checks that the
    /// operation kept the image dimensions.
    ///
    /// # Errors
    /// Operation specific
    fn execute_impl(&self, image: &mut PixelGrid) -> Result<(), ImageErrors>;

    /// Execute the operation on the image
    ///
    /// # Errors
    /// Any error of the operation, or
    /// [`OperationResized`](ImageErrors::OperationResized) if the operation
    /// changed the image dimensions
    ///
    /// # Example
    /// ```
    /// use imageops_image::errors::ImageErrors;
    /// use imageops_image::grid::PixelGrid;
    /// use imageops_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "Invert"
    ///     }
    ///     fn execute_impl(&self, image: &mut PixelGrid) -> Result<(), ImageErrors> {
    ///         image.pixels_mut().iter_mut().flatten().for_each(|x| *x = 255 - *x);
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut image = PixelGrid::fill([0, 10, 255], 2, 2).unwrap();
    /// Invert.execute(&mut image).unwrap();
    /// assert_eq!(image.get(1, 1), [255, 245, 0]);
    /// ```
    fn execute(&self, image: &mut PixelGrid) -> Result<(), ImageErrors> {
        let before = image.dimensions();

        trace!("Running {} on a {}x{} image", self.name(), before.0, before.1);

        self.execute_impl(image)?;

        let after = image.dimensions();

        if before != after {
            return Err(ImageErrors::OperationResized(self.name(), before, after));
        }
        Ok(())
    }
}
