/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

/// Which border handling blur and edge detection use
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BorderMode {
    Legacy,
    Full
}

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:      usize,
    pub max_height:     usize,
    pub strict_mode:    bool,
    pub override_files: bool,
    pub border_mode:    BorderMode,
    pub print:          bool,
    pub view:           bool,
    pub probe:          bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:      0,
            max_height:     0,
            strict_mode:    false,
            override_files: false,
            border_mode:    BorderMode::Legacy,
            print:          false,
            view:           false,
            probe:          false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.max_width = options.get_one::<usize>("max-width").copied().unwrap_or(1 << 14);
    cmd_options.max_height = options.get_one::<usize>("max-height").copied().unwrap_or(1 << 14);
    cmd_options.strict_mode = options.get_flag("strict");

    if options.get_flag("all-yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    if options.get_flag("full-borders") {
        info!("Recomputing border columns");
        cmd_options.border_mode = BorderMode::Full;
    }
    cmd_options.print = options.get_flag("print");
    cmd_options.view = options.get_flag("view");
    cmd_options.probe = options.get_flag("probe");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn;
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::{parse_options, BorderMode};

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["imageops", "-i", "a.ppm"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.max_width, 16384);
        assert_eq!(options.max_height, 16384);
        assert_eq!(options.border_mode, BorderMode::Legacy);
        assert!(!options.strict_mode);
        assert!(!options.override_files);
    }

    #[test]
    fn explicit_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "imageops",
                "-i",
                "a.ppm",
                "--max-width",
                "20",
                "--strict",
                "--full-borders",
                "--yes",
                "--print"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.max_width, 20);
        assert_eq!(options.border_mode, BorderMode::Full);
        assert!(options.strict_mode);
        assert!(options.override_files);
        assert!(options.print);
        assert!(!options.view);
    }
}
