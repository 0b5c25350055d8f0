/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `imageops`
//!
//! This implements the transforms of the imageops family,
//! flips, luminance grayscale, a 3x3 neighbourhood blur and
//! horizontal edge detection built from a gradient and a normalizer.
//!
//! Every transform is available both as a free function and as an
//! operation implementing the `OperationsTrait` defined by imageops-image.
//!
//! # Example
//! - Detect horizontal edges of an image
//! ```
//! use imageops_image::grid::PixelGrid;
//! use imageops_image::traits::OperationsTrait;
//! use imageops_procs::edges::Edges;
//!
//! let mut image = PixelGrid::from_rows(vec![vec![[10; 3], [10; 3], [50; 3], [10; 3]]]).unwrap();
//! // execute the filter
//! Edges::default().execute(&mut image).unwrap();
//!
//! // luminance of 10 is 16, of 50 is 82
//! assert_eq!(image.get(0, 1), [66, 66, 66]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod blur;
pub mod border;
pub mod edges;
pub mod flip;
pub mod gradient;
pub mod grayscale;
pub mod normalize;
