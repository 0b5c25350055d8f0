/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use imageops_core::options::DecoderOptions;
use imageops_image::errors::ImageErrors;
use imageops_image::grid::PixelGrid;
use imageops_image::pipelines::Pipeline;
use imageops_procs::blur::{Blur, BlurOptions};
use imageops_procs::edges::{EdgeOptions, Edges};
use imageops_procs::flip::{Flip, FlipDirection};
use imageops_procs::grayscale::Grayscale;
use serde::Deserialize;

mod pipelines;
mod ppm;
#[cfg(test)]
mod properties;

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:         String,
    #[serde(default)]
    pub operations:   Vec<String>,
    #[serde(default)]
    pub full_borders: bool,
    pub expected:     Option<String>,
    pub comment:      Option<String>
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

/// Read a manifest stored next to this crate under `tests/`
pub fn read_manifest(name: &str) -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name);
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

pub fn open_sample(name: &str) -> Result<PixelGrid, ImageErrors> {
    PixelGrid::open_with_options(ppm_path().join(name), DecoderOptions::default())
}

/// Run the named operations over `image` the way the command line does
pub fn run_operations(
    image: PixelGrid, operations: &[String], full_borders: bool
) -> Result<PixelGrid, ImageErrors> {
    let mut pipeline: Pipeline<PixelGrid> = Pipeline::new();
    pipeline.chain_image(image);

    for operation in operations {
        match operation.as_str() {
            "flip-horizontal" => {
                pipeline.chain_operations(Box::new(Flip::new(FlipDirection::Horizontal)));
            }
            "flip-vertical" => {
                pipeline.chain_operations(Box::new(Flip::new(FlipDirection::Vertical)));
            }
            "grayscale" => {
                pipeline.chain_operations(Box::new(Grayscale::new()));
            }
            "blur" if full_borders => {
                pipeline.chain_operations(Box::new(Blur::new(BlurOptions::full_borders())));
            }
            "blur" => {
                pipeline.chain_operations(Box::new(Blur::default()));
            }
            "edges" if full_borders => {
                pipeline.chain_operations(Box::new(Edges::new(EdgeOptions::full_borders())));
            }
            "edges" => {
                pipeline.chain_operations(Box::new(Edges::default()));
            }
            unknown => {
                return Err(ImageErrors::GenericString(format!(
                    "Unknown operation {unknown}"
                )))
            }
        }
    }
    pipeline.advance_to_end()?;

    pipeline
        .take_image()
        .ok_or(ImageErrors::NoImageForOperations)
}
