/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use imageops_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    PPMDecodeErrors(PPMDecodeErrors),
    PPMEncodeErrors(PPMEncodeErrors),
    /// Expected length, found length
    DimensionsMisMatch(usize, usize),
    /// Width and height of a grid that would be empty
    ZeroDimensions(usize, usize),
    /// Row index, expected width, found width
    RaggedRow(usize, usize, usize),
    /// Name of the operation and the dimensions before and after it ran
    OperationResized(&'static str, (usize, usize), (usize, usize)),
    NoImageForOperations,
    IoErrors(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PPMDecodeErrors(ref error) => {
                writeln!(f, "PPM decoding failed:{error:?}")
            }
            Self::PPMEncodeErrors(ref error) => {
                writeln!(f, "PPM encoding failed:{error:?}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid dimensions {width}x{height}, width and height must be non-zero"
                )
            }
            Self::RaggedRow(row, expected, found) => {
                writeln!(
                    f,
                    "Row {row} has {found} pixels but the first row has {expected}, grids must be rectangular"
                )
            }
            Self::OperationResized(name, before, after) => {
                writeln!(
                    f,
                    "Operation {name} changed dimensions from {before:?} to {after:?}"
                )
            }
            Self::NoImageForOperations => {
                writeln!(f, "No image found for which we can execute operations")
            }
            Self::IoErrors(ref err) => writeln!(f, "{err}"),
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for ImageErrors {}

impl From<PPMDecodeErrors> for ImageErrors {
    fn from(from: PPMDecodeErrors) -> Self {
        ImageErrors::PPMDecodeErrors(from)
    }
}

impl From<PPMEncodeErrors> for ImageErrors {
    fn from(from: PPMEncodeErrors) -> Self {
        ImageErrors::PPMEncodeErrors(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
