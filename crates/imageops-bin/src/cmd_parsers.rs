/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use imageops_core::options::DecoderOptions;

use crate::cmd_parsers::global_options::CmdOptions;

pub mod global_options;
pub mod operations;

/// Fill arguments into a Vec according to the
/// order which they were specified in the command line
pub fn fill_args(options: &ArgMatches) -> Vec<String> {
    let mut map = Vec::with_capacity(20);

    for id in options.ids() {
        if options.try_get_many::<clap::Id>(id.as_str()).is_ok() {
            // ignore groups
            continue;
        }

        if options.value_source(id.as_str()) != Some(ValueSource::CommandLine) {
            // ignore things not passed via command line
            continue;
        }
        let position = options.index_of(id.as_str()).unwrap_or(usize::MAX);

        map.push((position, id.to_string()));
    }
    map.sort_by_key(|(position, _)| *position);

    map.into_iter().map(|(_, argument)| argument).collect()
}

pub fn get_decoder_options(options: &CmdOptions) -> DecoderOptions {
    DecoderOptions::new_cmd()
        .set_max_height(options.max_height)
        .set_max_width(options.max_width)
        .set_strict_mode(options.strict_mode)
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::fill_args;

    #[test]
    fn arguments_keep_command_line_order() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "imageops",
                "--edges",
                "-i",
                "a.ppm",
                "--flip-vertical",
                "--blur"
            ])
            .unwrap();

        assert_eq!(fill_args(&matches), ["edges", "in", "flip-vertical", "blur"]);
    }
}
