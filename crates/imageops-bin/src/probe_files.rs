/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use imageops_core::options::DecoderOptions;
use imageops_image::errors::ImageErrors;
use imageops_ppm::PPMDecoder;

use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), ImageErrors> {
    if let Some(in_file) = args.get_one::<PathBuf>("in") {
        println!("{}", probe_file(in_file)?);
    }
    Ok(())
}

/// Read the header of `path` and return it as pretty printed JSON
pub fn probe_file(path: &Path) -> Result<String, ImageErrors> {
    let data = std::fs::read(path)?;
    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::new_cmd()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let mut decoder = PPMDecoder::new_with_options(options, &data);
    decoder.read_headers()?;

    let dimensions = decoder
        .dimensions()
        .ok_or(ImageErrors::GenericStr("Decoder did not report dimensions"))?;
    let max_value = decoder
        .max_value()
        .ok_or(ImageErrors::GenericStr("Decoder did not report a max value"))?;

    let metadata = Metadata::new(path.as_os_str().to_os_string(), dimensions, max_value);

    serde_json::to_string_pretty(&metadata).map_err(|x| ImageErrors::GenericString(x.to_string()))
}
