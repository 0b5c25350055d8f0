/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::fmt::{Debug, Display, Formatter};

use imageops_core::bytestream::ZByteReader;
use imageops_core::channel::{MAX_COLOR_VALUE, NUM_OF_COLORS};
use imageops_core::log::{info, trace, warn};
use imageops_core::options::DecoderOptions;

/// An instance of a plain PPM decoder
///
/// The decoder understands the `P3` format only
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       usize,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

/// Errors possible during decoding
pub enum PPMDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    InvalidHeader(String),
    UnsupportedImpl(String),
    LargeDimensions(usize, usize),
    ZeroDimensions(usize, usize),
    /// Expected number of samples and the number found
    NotEnoughSamples(usize, usize),
    /// A sample above the declared maximum, with its index
    SampleOutOfRange(usize, usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::UnsupportedImpl(val) => {
                writeln!(f, "Unsupported image, reason: {val}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Invalid dimensions {width}x{height}, both must be non-zero")
            }
            Self::NotEnoughSamples(expected, found) => {
                writeln!(f, "Expected {expected} samples but found {found}")
            }
            Self::SampleOutOfRange(value, position) => {
                writeln!(
                    f,
                    "Sample {value} at position {position} is greater than the max value"
                )
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: Plain PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use imageops_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use imageops_core::options::DecoderOptions;
    /// use imageops_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P3 2 1 255 0 0 0 0 0 0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    #[must_use]
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        let reader = ZByteReader::new(data);

        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false,
            reader,
            options
        }
    }
    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op.
    ///
    /// # Errors
    /// Bad magic bytes, unsupported versions, malformed numbers
    /// or dimensions outside the configured limits
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.reader.has(3) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 3 bytes in header but stream has {len}");

            return Err(PPMDecodeErrors::Generic(msg));
        }
        let p = self.reader.get_u8();
        let version = self.reader.get_u8();

        if p != b'P' {
            let msg = format!("Expected P as first PPM byte but got '{}' ", p as char);

            return Err(PPMDecodeErrors::Generic(msg));
        }

        match version {
            b'3' => self.decode_p3_header(),
            b'1'..=b'7' => {
                let msg = format!(
                    "PPM version `P{}` is not supported, only plain pixmaps (P3) are",
                    version as char
                );
                Err(PPMDecodeErrors::UnsupportedImpl(msg))
            }
            _ => {
                let msg = format!("Unknown PPM version `{}`", version as char);

                Err(PPMDecodeErrors::Generic(msg))
            }
        }
    }

    /// Decode the header of a plain pixmap
    fn decode_p3_header(&mut self) -> Result<(), PPMDecodeErrors> {
        if !skip_spaces(&mut self.reader) {
            return Err(PPMDecodeErrors::InvalidHeader(
                "Expected whitespace after the magic bytes".to_string()
            ));
        }
        self.width = self.read_integer("width")?;

        if self.width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        skip_spaces(&mut self.reader);

        self.height = self.read_integer("height")?;

        if self.height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(PPMDecodeErrors::ZeroDimensions(self.width, self.height));
        }

        info!("Width: {}, height: {}", self.width, self.height);

        skip_spaces(&mut self.reader);
        // read max value, the format allows anything up to 65535
        // but images handled here are always 8 bit
        self.max_value = self.read_integer("max value")?;

        if self.max_value != MAX_COLOR_VALUE as usize {
            warn!(
                "Max value {} is not {}, samples are used as is",
                self.max_value, MAX_COLOR_VALUE
            );
        }
        info!("Max value: {}", self.max_value);

        self.decoded_headers = true;

        Ok(())
    }

    /// Read a run of ascii digits as a number
    ///
    /// `what` names the value for error messages
    fn read_integer(&mut self, what: &'static str) -> Result<usize, PPMDecodeErrors> {
        let mut value = 0_usize;
        let mut digits = 0;

        while !self.reader.eof() {
            let byte = self.reader.get_u8();

            if byte.is_ascii_digit() {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(usize::from(byte - b'0')))
                    .ok_or_else(|| {
                        PPMDecodeErrors::Generic(format!("Value for {what} overflows"))
                    })?;
                digits += 1;
            } else {
                // rewind to the previous byte
                self.reader.rewind(1);
                break;
            }
        }
        if digits == 0 {
            let found = self
                .reader
                .peek_at(0, 1)
                .map_or("end of stream".to_string(), |x| format!("'{}'", x[0] as char));

            return Err(PPMDecodeErrors::InvalidHeader(format!(
                "Expected a number for {what} but found {found}"
            )));
        }
        Ok(value)
    }

    /// Return the declared maximum intensity or none if headers
    /// are not decoded
    #[must_use]
    pub const fn max_value(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }
    /// Return image dimensions as `(width, height)` or none if headers
    /// are not decoded
    #[must_use]
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }
    /// Decode a plain PPM file and return its samples
    ///
    /// Samples are returned row-major with the three channels of
    /// each pixel next to each other, i.e `[R,G,B,R,G,B,...]`
    ///
    /// # Errors
    /// Any header error, too few samples, or in strict mode trailing
    /// data and samples above the declared max value
    pub fn decode(&mut self) -> Result<Vec<i32>, PPMDecodeErrors> {
        self.read_headers()?;

        let size = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(NUM_OF_COLORS))
            .ok_or(PPMDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        let strict = self.options.get_strict_mode();
        let mut warned_range = false;
        let mut data = Vec::with_capacity(size);

        for position in 0..size {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(PPMDecodeErrors::NotEnoughSamples(size, position));
            }
            let sample = self.read_integer("sample")?;

            if sample > self.max_value {
                if strict {
                    return Err(PPMDecodeErrors::SampleOutOfRange(sample, position));
                }
                if !warned_range {
                    warn!(
                        "Sample {} at position {} is greater than the max value {}",
                        sample, position, self.max_value
                    );
                    warned_range = true;
                }
            }
            let sample = i32::try_from(sample).map_err(|_| {
                PPMDecodeErrors::Generic(format!("Sample {sample} does not fit an intensity"))
            })?;

            data.push(sample);
        }
        skip_spaces(&mut self.reader);

        if !self.reader.eof() {
            let remaining = self.reader.remaining();

            if strict {
                let msg = format!("Found {remaining} bytes of trailing data after the samples");
                return Err(PPMDecodeErrors::Generic(msg));
            }
            warn!("Ignoring {} bytes of trailing data", remaining);
        }
        trace!("Decoded {} samples", data.len());

        Ok(data)
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
///
/// Returns true if anything was skipped
fn skip_spaces(byte_stream: &mut ZByteReader) -> bool {
    let start = byte_stream.get_position();

    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
    byte_stream.get_position() != start
}
