/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{
    BLUR_HELP, EDGES_HELP, FULL_BORDERS_HELP, GRAYSCALE_HELP, PROBE_HELP
};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("imageops")
        .about("Flip, grayscale, blur and detect edges of plain PPM images")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Plain PPM file to write the result to")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("print")
            .long("print")
            .action(ArgAction::SetTrue)
            .help("Print the resulting pixels as a table to standard output"))
        .arg(Arg::new("view")
            .long("view")
            .action(ArgAction::SetTrue)
            .help("View the resulting image using the default image viewer"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print information about the input file and exit")
            .long_help(PROBE_HELP))
        .arg(Arg::new("all-yes")
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output file without asking"))
        .args(add_logging_options())
        .args(add_settings())
        .args(add_operations())
}

#[rustfmt::skip]
fn add_logging_options() -> [Arg; 4] {
    [
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options")
    ]
}

#[rustfmt::skip]
fn add_settings() -> [Arg; 5] {
    [
        Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image, larger images are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"),
        Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image, larger images are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"),
        Arg::new("strict")
            .long("strict")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Treat trailing data and out of range samples as errors"),
        Arg::new("legacy-borders")
            .long("legacy-borders")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .conflicts_with("full-borders")
            .help("Keep the historic border columns of blur and edges (default)"),
        Arg::new("full-borders")
            .long("full-borders")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Compute border columns of blur and edges from their neighbours")
            .long_help(FULL_BORDERS_HELP),
    ]
}

#[rustfmt::skip]
fn add_operations() -> [Arg; 5] {
    [
        Arg::new("flip-horizontal")
            .long("flip-horizontal")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Mirror the image around its vertical axis"),
        Arg::new("flip-vertical")
            .long("flip-vertical")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Reverse the order of the image rows"),
        Arg::new("grayscale")
            .long("grayscale")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Convert the image to grayscale")
            .long_help(GRAYSCALE_HELP),
        Arg::new("blur")
            .long("blur")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Blur the image with a 3x3 average")
            .long_help(BLUR_HELP),
        Arg::new("edges")
            .long("edges")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Replace the image with its horizontal edges")
            .long_help(EDGES_HELP),
    ]
}
