/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::io::{stdin, stdout, BufRead};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use imageops_image::display::write_table;
use imageops_image::errors::ImageErrors;
use imageops_image::pipelines::Pipeline;
use imageops_image::traits::IntoImage;
use log::Level::Debug;
use log::{debug, info, log_enabled, trace, warn};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{fill_args, get_decoder_options, operations};
use crate::file_io::ImageFile;
use crate::probe_files::probe_input_files;
use crate::show_gui::open_in_default_app;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    if cmd_opts.probe {
        return probe_input_files(args);
    }
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or(ImageErrors::GenericStr("No input file given"))?;
    let out_file = args.get_one::<PathBuf>("out");

    verify_file_paths(in_file, out_file.map(PathBuf::as_path), cmd_opts)?;

    let mut workflow = Pipeline::new();

    workflow.chain_decoder(ImageFile::new(
        in_file.clone(),
        get_decoder_options(cmd_opts)
    ));

    add_operations(args, &mut workflow, cmd_opts);

    workflow.advance_to_end()?;

    let image = workflow
        .image()
        .ok_or(ImageErrors::NoImageForOperations)?;

    if let Some(out_file) = out_file {
        image.save(out_file)?;
    }
    if cmd_opts.print {
        write_table(image, &mut stdout().lock())?;
    }
    if cmd_opts.view {
        open_in_default_app(image)?;
    }
    if out_file.is_none() && !cmd_opts.print && !cmd_opts.view {
        warn!("No output, --print or --view given, the result is discarded");
    }
    Ok(())
}

fn verify_file_paths(
    in_path: &Path, out_path: Option<&Path>, options: &CmdOptions
) -> Result<(), ImageErrors> {
    if !in_path.exists() {
        return Err(ImageErrors::GenericString(format!(
            "Path {in_path:?}, does not exist"
        )));
    }

    if !in_path.is_file() {
        return Err(ImageErrors::GenericString(format!(
            "Path {in_path:?} is not a file"
        )));
    }
    let Some(out_path) = out_path else {
        return Ok(());
    };

    if out_path.extension() != Some(OsStr::new("ppm")) {
        warn!("Output {:?} does not end with .ppm, writing a plain PPM anyway", out_path);
    }

    if in_path == out_path {
        return Err(ImageErrors::GenericString(format!(
            "Cannot use {in_path:?} as both input and output"
        )));
    }

    if out_path.exists() {
        if options.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(ImageErrors::GenericString(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}

pub fn add_operations<T: IntoImage>(
    args: &ArgMatches, workflow: &mut Pipeline<T>, cmd_opts: &CmdOptions
) {
    for argument in fill_args(args) {
        if !operations::parse_options(workflow, &argument, cmd_opts) {
            trace!("Argument `{argument}` is not an operation");
        }
    }
    if log_enabled!(Debug) {
        debug!("Operations in order: {:?}", workflow.operation_names());
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use imageops_image::grid::PixelGrid;
    use imageops_image::pipelines::Pipeline;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::workflow::{add_operations, verify_file_paths};

    #[test]
    fn missing_input_is_an_error() {
        let options = CmdOptions::new();

        assert!(verify_file_paths(Path::new("/no/such/input.ppm"), None, &options).is_err());
    }

    #[test]
    fn same_input_and_output() {
        let mut path = std::env::temp_dir();
        path.push("imageops-same-input-output.ppm");
        std::fs::write(&path, b"P3 1 1 255 0 0 0").unwrap();

        let options = CmdOptions::new();

        assert!(verify_file_paths(&path, Some(path.as_path()), &options).is_err());
        assert!(verify_file_paths(&path, None, &options).is_ok());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn output_extension_is_not_enforced() {
        let mut path = std::env::temp_dir();
        path.push("imageops-extension-input.ppm");
        std::fs::write(&path, b"P3 1 1 255 0 0 0").unwrap();

        let options = CmdOptions::new();
        let out = std::env::temp_dir().join("imageops-extension-output.txt");

        assert!(verify_file_paths(&path, Some(out.as_path()), &options).is_ok());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn non_operation_arguments_are_skipped() {
        let matches = create_cmd_args()
            .try_get_matches_from(["imageops", "--print", "-i", "a.ppm", "--grayscale"])
            .unwrap();
        let mut pipeline: Pipeline<PixelGrid> = Pipeline::new();

        add_operations(&matches, &mut pipeline, &CmdOptions::new());

        assert_eq!(pipeline.operation_names(), ["Grayscale"]);
    }
}
