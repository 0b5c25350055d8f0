/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;

use imageops_core::channel::{MAX_COLOR_VALUE, NUM_OF_COLORS};

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    Static(&'static str),
    /// A sample below zero and its position
    NegativeSample(i32, usize),
    IOErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IOErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PPMEncodeErrors::NegativeSample(value, position) => {
                writeln!(
                    f,
                    "Cannot encode negative sample {value} at position {position}"
                )
            }
            PPMEncodeErrors::IOErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PPMEncodeErrors {}

/// A plain PPM encoder
///
/// The maximum value written in the header is 255 unless a
/// sample is larger, in which case the largest sample is used so
/// the file stays valid.
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(
        &mut self, width: usize, height: usize, max_val: i32
    ) -> Result<(), PPMEncodeErrors> {
        let header = format!("P3\n{width} {height}\n{max_val}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode interleaved `data` as a plain PPM file
    ///
    /// Each pixel row is written on its own line.
    ///
    /// # Errors
    /// - Data length does not match `width * height * 3`
    /// - A sample is negative
    /// - The writer fails
    pub fn encode(&mut self, width: usize, height: usize, data: &[i32]) -> Result<(), PPMEncodeErrors> {
        if width == 0 || height == 0 {
            return Err(PPMEncodeErrors::Static("Cannot encode an empty image"));
        }
        if width * height * NUM_OF_COLORS != data.len() {
            return Err(PPMEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        if let Some((position, value)) = data.iter().enumerate().find(|(_, x)| **x < 0) {
            return Err(PPMEncodeErrors::NegativeSample(*value, position));
        }
        let max_val = data.iter().copied().fold(MAX_COLOR_VALUE, i32::max);

        self.write_headers(width, height, max_val)?;

        let mut line = String::with_capacity(width * NUM_OF_COLORS * 4);

        for row in data.chunks_exact(width * NUM_OF_COLORS) {
            line.clear();

            for (pos, sample) in row.iter().enumerate() {
                if pos != 0 {
                    line.push(' ');
                }
                line.push_str(&sample.to_string());
            }
            line.push('\n');
            self.writer.write_all(line.as_bytes())?;
        }
        self.writer.flush()?;

        Ok(())
    }
}
