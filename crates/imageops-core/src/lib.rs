/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all imageops libraries
//!
//! This crate provides a set of core routines shared
//! by the codec, the image container and the processing routines.
//!
//! It currently contains
//!
//! - Channel indices and intensity constants
//! - A byte reader used by the text decoders
//! - Decoder options
//! - A logging shim that forwards to the `log` crate when enabled
//!
//! # Features
//!  - `log`: Route the logging macros to the [`log`](https://docs.rs/log) crate,
//!     without it the macros compile to nothing.
#![macro_use]

pub mod bytestream;
pub mod channel;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;

#[cfg(feature = "log")]
pub use log;
