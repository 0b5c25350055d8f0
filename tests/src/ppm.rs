/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use imageops_core::options::DecoderOptions;
use imageops_ppm::PPMDecoder;

use crate::{open_sample, ppm_path, read_manifest};

#[test]
fn comments_are_skipped() {
    let image = open_sample("gradient-4x3.ppm").unwrap();

    assert_eq!(image.dimensions(), (4, 3));
    assert_eq!(image.get(0, 0), [12, 40, 200]);
    assert_eq!(image.get(1, 3), [255, 0, 128]);
    assert_eq!(image.get(2, 1), [200, 10, 20]);
}

#[test]
fn strict_mode_accepts_clean_files() {
    let data = read(ppm_path().join("noise-9x7.ppm")).unwrap();
    let options = DecoderOptions::default().set_strict_mode(true);

    let mut decoder = PPMDecoder::new_with_options(options, &data);
    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((9, 7)));
    assert_eq!(pixels.len(), 9 * 7 * 3);
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_invalid_files() {
    let entries = read_manifest("invalid.json");

    for entry in &entries {
        let data = read(ppm_path().join(&entry.name)).unwrap();
        let mut decoder = PPMDecoder::new(&data);

        assert!(
            decoder.decode().is_err(),
            "{:?} decoded without errors, {:?}",
            entry.name,
            entry.comment
        );
        assert!(open_sample(&entry.name).is_err());
    }
}
