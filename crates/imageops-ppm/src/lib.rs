/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A plain Portable Pixmap (`P3`) decoder and encoder
//!
//! Plain pixmaps store a short text header followed by
//! `width * height * 3` whitespace separated intensities,
//! row-major with the channels of each pixel interleaved.
//!
//! # Example
//! ```
//! use imageops_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut decoder = PPMDecoder::new(b"P3 2 1 255 1 2 3 4 5 6");
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.dimensions(), Some((2, 1)));
//! assert_eq!(pixels, [1, 2, 3, 4, 5, 6]);
//!
//! let mut out = Vec::new();
//! PPMEncoder::new(&mut out).encode(2, 1, &pixels).unwrap();
//! assert_eq!(out, b"P3\n2 1\n255\n1 2 3 4 5 6\n");
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

pub use crate::decoder::*;
pub use crate::encoder::*;

mod decoder;
mod encoder;
