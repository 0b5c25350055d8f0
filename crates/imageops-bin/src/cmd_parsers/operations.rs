/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imageops_image::pipelines::Pipeline;
use imageops_image::traits::IntoImage;
use imageops_procs::blur::{Blur, BlurOptions};
use imageops_procs::edges::{EdgeOptions, Edges};
use imageops_procs::flip::{Flip, FlipDirection};
use imageops_procs::grayscale::Grayscale;
use log::debug;

use crate::cmd_parsers::global_options::{BorderMode, CmdOptions};

/// Add the operation named `argument` to the pipeline
///
/// Returns whether `argument` named an operation, other
/// arguments leave the pipeline untouched.
pub fn parse_options<T: IntoImage>(
    workflow: &mut Pipeline<T>, argument: &str, cmd_options: &CmdOptions
) -> bool {
    let full_borders = cmd_options.border_mode == BorderMode::Full;

    if argument == "flip-horizontal" {
        debug!("Added horizontal flip operation");
        workflow.chain_operations(Box::new(Flip::new(FlipDirection::Horizontal)));
    } else if argument == "flip-vertical" {
        debug!("Added vertical flip operation");
        workflow.chain_operations(Box::new(Flip::new(FlipDirection::Vertical)));
    } else if argument == "grayscale" {
        debug!("Added grayscale operation");
        workflow.chain_operations(Box::new(Grayscale::new()));
    } else if argument == "blur" {
        let options = if full_borders {
            BlurOptions::full_borders()
        } else {
            BlurOptions::default()
        };
        debug!("Added blur operation with {:?}", options);
        workflow.chain_operations(Box::new(Blur::new(options)));
    } else if argument == "edges" {
        let options = if full_borders {
            EdgeOptions::full_borders()
        } else {
            EdgeOptions::default()
        };
        debug!("Added edge detection with {:?}", options);
        workflow.chain_operations(Box::new(Edges::new(options)));
    } else {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use imageops_image::grid::PixelGrid;
    use imageops_image::pipelines::Pipeline;

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::cmd_parsers::operations::parse_options;

    #[test]
    fn operations_are_chained_in_order() {
        let mut pipeline: Pipeline<PixelGrid> = Pipeline::new();
        let options = CmdOptions::new();

        for argument in ["in", "edges", "flip-horizontal", "print", "blur"] {
            parse_options(&mut pipeline, argument, &options);
        }
        assert_eq!(
            pipeline.operation_names(),
            ["Edges", "Flip horizontal", "Blur"]
        );
    }
}
