/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The image container used by the imageops crates
//!
//! This crate holds
//!
//! - [`PixelGrid`](grid::PixelGrid): a rectangular `height x width x 3` grid of intensities
//! - [`GradientGrid`](grid::GradientGrid): a rectangular grid of signed scalars
//! - [`OperationsTrait`](traits::OperationsTrait) and a [`Pipeline`](pipelines::Pipeline) to chain operations
//! - Plain PPM reading and writing glue and a numeric table printer
//!
//! # Example
//! ```
//! use imageops_image::grid::PixelGrid;
//!
//! let grid = PixelGrid::read_ppm(b"P3 1 1 255 10 20 30", Default::default()).unwrap();
//! assert_eq!(grid.get(0, 0), [10, 20, 30]);
//! assert_eq!(grid.to_string(), " 10 20 30 \n");
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
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod codecs;
pub mod display;
pub mod errors;
pub mod grid;
pub mod pipelines;
pub mod traits;
