/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Reading and writing pixel grids as plain PPM
//!
//! The decoder and encoder live in `imageops-ppm`, this module
//! glues them to [`PixelGrid`].
use std::io::Write;
use std::path::Path;

use imageops_core::log::{info, trace};
use imageops_core::options::DecoderOptions;
use imageops_ppm::{PPMDecoder, PPMEncoder};

use crate::errors::ImageErrors;
use crate::grid::PixelGrid;
use crate::traits::IntoImage;

impl<'a> IntoImage for PPMDecoder<'a> {
    fn into_image(mut self) -> Result<PixelGrid, ImageErrors> {
        let samples = self.decode()?;
        let (width, height) = self
            .dimensions()
            .ok_or(ImageErrors::GenericStr("Decoder did not report dimensions"))?;

        PixelGrid::from_raw(&samples, width, height)
    }
}

impl PixelGrid {
    /// Decode a plain PPM file held in memory
    ///
    /// # Errors
    /// Any decoding error, see [`PPMDecodeErrors`](imageops_ppm::PPMDecodeErrors)
    pub fn read_ppm(data: &[u8], options: DecoderOptions) -> Result<PixelGrid, ImageErrors> {
        PPMDecoder::new_with_options(options, data).into_image()
    }

    /// Open and decode a plain PPM file with the default options
    ///
    /// # Errors
    /// I/O errors opening the file and decoding errors
    pub fn open<P: AsRef<Path>>(file: P) -> Result<PixelGrid, ImageErrors> {
        PixelGrid::open_with_options(file, DecoderOptions::default())
    }

    /// Open and decode a plain PPM file with the specified decoder options
    ///
    /// ```no_run
    /// use imageops_core::options::DecoderOptions;
    /// use imageops_image::grid::PixelGrid;
    ///
    /// let options = DecoderOptions::default().set_strict_mode(true).set_max_width(100);
    /// let image = PixelGrid::open_with_options("/a/file.ppm", options).unwrap();
    /// ```
    ///
    /// # Errors
    /// I/O errors opening the file and decoding errors
    pub fn open_with_options<P: AsRef<Path>>(
        file: P, options: DecoderOptions
    ) -> Result<PixelGrid, ImageErrors> {
        let file = file.as_ref();
        let data = std::fs::read(file)?;

        trace!("Read {} bytes from {:?}", data.len(), file);

        PixelGrid::read_ppm(&data, options)
    }

    /// Encode this grid as plain PPM to `sink`
    ///
    /// # Errors
    /// Negative intensities and writer errors
    pub fn write_ppm<W: Write>(&self, sink: &mut W) -> Result<(), ImageErrors> {
        let (width, height) = self.dimensions();

        PPMEncoder::new(sink).encode(width, height, &self.to_interleaved())?;

        Ok(())
    }

    /// Save this grid as a plain PPM file, replacing the file if it exists
    ///
    /// # Errors
    /// I/O errors creating the file and encoding errors
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), ImageErrors> {
        let path = file.as_ref();

        let mut file = std::io::BufWriter::new(
            std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?
        );
        self.write_ppm(&mut file)?;

        info!("Wrote {}x{} image to {:?}", self.width(), self.height(), path);

        Ok(())
    }
}
