/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pipelines, chaining operations over an image
//!
use std::time::Instant;

use imageops_core::log::Level::Trace;
use imageops_core::log::{log_enabled, trace};

use crate::errors::ImageErrors;
use crate::grid::PixelGrid;
use crate::traits::{IntoImage, OperationsTrait};

#[derive(Copy, Clone, Debug)]
enum PipelineState {
    /// Initial state, the struct has been defined
    Initialized,
    /// The pipeline is ready to produce the image from its source
    Decode,
    /// The pipeline is ready to carry out image processing routines
    Operations,
    /// The pipeline is done.
    Finished
}

impl PipelineState {
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineState::Initialized => Some(PipelineState::Decode),
            PipelineState::Decode => Some(PipelineState::Operations),
            PipelineState::Operations => Some(PipelineState::Finished),
            PipelineState::Finished => None
        }
    }
}

/// Pipeline, ordered image processing
///
/// A pipeline takes an image source (anything implementing
/// [IntoImage](crate::traits::IntoImage)), turns it into an image
/// and runs the chained operations on it in the order they were added.
///
/// # Example
/// ```
/// use imageops_image::grid::PixelGrid;
/// use imageops_image::pipelines::Pipeline;
///
/// let image = PixelGrid::fill([1, 2, 3], 4, 4).unwrap();
///
/// let mut pipeline = Pipeline::new();
/// pipeline.chain_decoder(image);
/// pipeline.advance_to_end().unwrap();
///
/// assert_eq!(pipeline.image().unwrap().get(0, 0), [1, 2, 3]);
/// ```
pub struct Pipeline<T: IntoImage> {
    state:      Option<PipelineState>,
    decode:     Option<T>,
    image:      Option<PixelGrid>,
    operations: Vec<Box<dyn OperationsTrait>>
}

impl<T> Pipeline<T>
where
    T: IntoImage
{
    /// Create a new, empty pipeline
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Pipeline<T> {
        Pipeline {
            state:      Some(PipelineState::Initialized),
            decode:     None,
            image:      None,
            operations: vec![]
        }
    }

    /// Use an already decoded image, the source is then never consulted
    pub fn chain_image(&mut self, image: PixelGrid) -> &mut Pipeline<T> {
        self.image = Some(image);
        self
    }

    /// Set the image source for this pipeline
    ///
    /// There can only be one source in a pipeline, so the last one
    /// is the one that will be considered.
    pub fn chain_decoder(&mut self, decoder: T) -> &mut Pipeline<T> {
        self.decode = Some(decoder);
        self
    }
    /// Add a new operation to the pipeline.
    ///
    /// Operations run in the order they are added.
    pub fn chain_operations(&mut self, operation: Box<dyn OperationsTrait>) -> &mut Pipeline<T> {
        self.operations.push(operation);
        self
    }

    /// Names of the chained operations, in execution order
    #[must_use]
    pub fn operation_names(&self) -> Vec<&'static str> {
        self.operations.iter().map(|x| x.name()).collect()
    }

    /// The image in this pipeline, if it was decoded
    #[must_use]
    pub fn image(&self) -> Option<&PixelGrid> {
        self.image.as_ref()
    }

    /// Take the image out of the pipeline
    pub fn take_image(&mut self) -> Option<PixelGrid> {
        self.image.take()
    }

    /// Advance the pipeline one state forward
    ///
    /// The pipeline advance is as follows
    ///
    /// 1. Decode
    /// 2. All operations [ all ran at once]
    /// 3. Finish
    ///
    /// # Errors
    /// Source errors, operation errors or
    /// [`NoImageForOperations`](ImageErrors::NoImageForOperations) when there is
    /// neither an image nor a source
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        match state {
            PipelineState::Decode => {
                if let Some(decode_op) = self.decode.take() {
                    if self.image.is_some() {
                        trace!("Image already present, no need to decode");
                    } else {
                        let start = Instant::now();

                        self.image = Some(decode_op.into_image()?);

                        trace!("Finished decoding in {} ms", start.elapsed().as_millis());
                    }
                } else if self.image.is_none() {
                    return Err(ImageErrors::NoImageForOperations);
                }
                self.state = state.next();
            }
            PipelineState::Operations => {
                let image = self
                    .image
                    .as_mut()
                    .ok_or(ImageErrors::NoImageForOperations)?;

                if log_enabled!(Trace) && !self.operations.is_empty() {
                    trace!("Current state: {:?}", state);
                }

                for operation in &self.operations {
                    let operation_name = operation.name();
                    let start = Instant::now();

                    operation.execute(image)?;

                    trace!(
                        "Finished running `{operation_name}` in {} ms",
                        start.elapsed().as_millis()
                    );
                }
                self.state = state.next();
            }
            PipelineState::Finished => {
                trace!("Finished operations for this pipeline");

                self.state = state.next();
            }
            PipelineState::Initialized => {
                self.state = state.next();
            }
        }
        Ok(())
    }
    /// Advance the pipeline until it finishes.
    ///
    /// This will produce the image and run all operations on it.
    ///
    /// # Errors
    /// See [`advance`](Pipeline::advance)
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::errors::ImageErrors;
    use crate::grid::PixelGrid;
    use crate::pipelines::Pipeline;
    use crate::traits::OperationsTrait;

    struct Record {
        tag: i32,
        log: Rc<RefCell<Vec<i32>>>
    }

    impl OperationsTrait for Record {
        fn name(&self) -> &'static str {
            "Record"
        }
        fn execute_impl(&self, image: &mut PixelGrid) -> Result<(), ImageErrors> {
            self.log.borrow_mut().push(self.tag);
            image.get_mut(0, 0)[0] += self.tag;
            Ok(())
        }
    }

    struct Shrink;

    impl OperationsTrait for Shrink {
        fn name(&self) -> &'static str {
            "Shrink"
        }
        fn execute_impl(&self, image: &mut PixelGrid) -> Result<(), ImageErrors> {
            *image = PixelGrid::new(1, 1)?;
            Ok(())
        }
    }

    #[test]
    fn operations_run_in_order() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut pipeline = Pipeline::new();

        pipeline.chain_decoder(PixelGrid::new(2, 2).unwrap());
        for tag in [1, 2, 3] {
            pipeline.chain_operations(Box::new(Record {
                tag,
                log: log.clone()
            }));
        }
        pipeline.advance_to_end().unwrap();

        assert_eq!(*log.borrow(), [1, 2, 3]);
        assert_eq!(pipeline.image().unwrap().get(0, 0)[0], 6);
        assert_eq!(pipeline.operation_names(), ["Record"; 3]);
    }

    #[test]
    fn chained_image_is_used_without_decoding() {
        let mut pipeline = Pipeline::new();

        pipeline
            .chain_decoder(PixelGrid::fill([1, 1, 1], 2, 2).unwrap())
            .chain_image(PixelGrid::fill([2, 2, 2], 2, 2).unwrap());
        pipeline.advance_to_end().unwrap();

        assert_eq!(pipeline.image().unwrap().get(1, 1), [2, 2, 2]);

        let mut only_image: Pipeline<PixelGrid> = Pipeline::new();
        only_image.chain_image(PixelGrid::fill([3, 3, 3], 1, 1).unwrap());
        only_image.advance_to_end().unwrap();

        assert_eq!(only_image.take_image().unwrap().get(0, 0), [3, 3, 3]);
    }

    #[test]
    fn missing_image_is_an_error() {
        let mut pipeline: Pipeline<PixelGrid> = Pipeline::new();

        assert!(matches!(
            pipeline.advance_to_end(),
            Err(ImageErrors::NoImageForOperations)
        ));
    }

    #[test]
    fn resizing_operations_are_rejected() {
        let mut pipeline = Pipeline::new();

        pipeline
            .chain_decoder(PixelGrid::new(3, 3).unwrap())
            .chain_operations(Box::new(Shrink));

        assert!(matches!(
            pipeline.advance_to_end(),
            Err(ImageErrors::OperationResized("Shrink", (3, 3), (1, 1)))
        ));
    }
}
