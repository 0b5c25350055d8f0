/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imageops_image::grid::PixelGrid;
use imageops_procs::blur::{blur_with_options, BlurOptions};
use imageops_procs::edges::edges;
use imageops_procs::flip::{flip_horizontal, flip_vertical};
use nanorand::Rng;

use crate::run_operations;

fn random_grid(rand: &mut nanorand::WyRand) -> PixelGrid {
    let width = rand.generate_range(1_usize..24);
    let height = rand.generate_range(1_usize..24);

    let mut data = vec![0_u8; width * height * 3];
    rand.fill(&mut data);

    let data: Vec<i32> = data.iter().map(|x| i32::from(*x)).collect();
    PixelGrid::from_raw(&data, width, height).unwrap()
}

fn operations(names: &[&str]) -> Vec<String> {
    names.iter().map(|x| (*x).to_string()).collect()
}

#[test]
fn flips_commute() {
    let mut rand = nanorand::WyRand::new();

    for _ in 0..10 {
        let image = random_grid(&mut rand);

        let mut a = image.clone();
        flip_horizontal(&mut a);
        flip_vertical(&mut a);

        let mut b = image.clone();
        flip_vertical(&mut b);
        flip_horizontal(&mut b);

        assert_eq!(a, b);
    }
}

#[test]
fn double_flips_through_a_pipeline() {
    let mut rand = nanorand::WyRand::new();
    let names = operations(&[
        "flip-horizontal",
        "flip-vertical",
        "flip-horizontal",
        "flip-vertical"
    ]);

    for _ in 0..10 {
        let image = random_grid(&mut rand);
        let result = run_operations(image.clone(), &names, false).unwrap();

        assert_eq!(result, image);
    }
}

#[test]
fn uniform_images_survive_full_blur() {
    let mut rand = nanorand::WyRand::new();

    for _ in 0..10 {
        let pixel = [
            rand.generate_range(0_i32..256),
            rand.generate_range(0_i32..256),
            rand.generate_range(0_i32..256)
        ];
        let width = rand.generate_range(1_usize..16);
        let height = rand.generate_range(1_usize..16);

        let image = PixelGrid::fill(pixel, width, height).unwrap();

        assert_eq!(blur_with_options(&image, BlurOptions::full_borders()), image);
    }
}

#[test]
fn edges_are_gray_and_non_negative() {
    let mut rand = nanorand::WyRand::new();

    for _ in 0..10 {
        let image = random_grid(&mut rand);
        let result = edges(&image).unwrap();

        for [r, g, b] in result.pixels() {
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert!(*r >= 0);
        }
        for row in result.rows() {
            assert_eq!(row[0], [0; 3]);
            assert_eq!(row[row.len() - 1], [0; 3]);
        }
    }
}

#[test]
fn decoded_images_blur_like_the_original() {
    let mut rand = nanorand::WyRand::new();
    let names = operations(&["grayscale", "blur"]);

    for _ in 0..5 {
        let image = random_grid(&mut rand);

        let mut encoded = Vec::new();
        image.write_ppm(&mut encoded).unwrap();
        let decoded = PixelGrid::read_ppm(&encoded, Default::default()).unwrap();

        assert_eq!(
            run_operations(decoded, &names, false).unwrap(),
            run_operations(image, &names, false).unwrap()
        );
    }
}
