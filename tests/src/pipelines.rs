/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::{open_sample, read_manifest, run_operations};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_pipelines() {
    let entries = read_manifest("pipelines.json");

    let mut error = false;
    let mut files = Vec::new();

    for entry in &entries {
        let image = open_sample(&entry.name).unwrap();
        let expected_name = entry.expected.as_ref().unwrap();
        let expected = open_sample(expected_name).unwrap();

        let result = run_operations(image, &entry.operations, entry.full_borders).unwrap();

        if result != expected {
            error = true;
            files.push(entry.to_owned());
            // report error
            let err = format!(
                "Output mismatch for {:?}\nExpected\n{}\nbut found\n{}\nConfig:{:#?}",
                entry.name, expected, result, entry
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during pipeline tests\n {:#?}", files);
    }
}

#[test]
fn output_survives_a_round_trip() {
    let entries = read_manifest("pipelines.json");

    for entry in &entries {
        let image = open_sample(&entry.name).unwrap();
        let result = run_operations(image, &entry.operations, entry.full_borders).unwrap();

        let mut encoded = Vec::new();
        result.write_ppm(&mut encoded).unwrap();

        let decoded =
            imageops_image::grid::PixelGrid::read_ppm(&encoded, Default::default()).unwrap();

        assert_eq!(decoded, result, "{:?}", entry);
    }
}
