/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use imageops_core::options::DecoderOptions;
use imageops_image::errors::ImageErrors;
use imageops_image::grid::PixelGrid;
use imageops_image::traits::IntoImage;

/// A plain PPM file on disk, decoded when the pipeline asks for it
pub struct ImageFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl ImageFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> ImageFile {
        ImageFile { file_path, options }
    }
}

impl IntoImage for ImageFile {
    fn into_image(self) -> Result<PixelGrid, ImageErrors> {
        PixelGrid::open_with_options(self.file_path, self.options)
    }
}
