/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Channel indices and intensity limits
//!
//! Every image handled by this family of crates is stored
//! as three interleaved color components per pixel.

/// Number of color components in a pixel
pub const NUM_OF_COLORS: usize = 3;

/// Largest intensity a channel holds under normal operation
pub const MAX_COLOR_VALUE: i32 = 255;

/// A single pixel, one intensity per [`Channel`]
pub type Pixel = [i32; NUM_OF_COLORS];

/// A color component of a pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue
}

impl Channel {
    /// All channels in storage order
    pub const ALL: [Channel; NUM_OF_COLORS] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel inside a [`Pixel`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2
        }
    }
}
