/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct holding options shared
//! by decoders, the same `DecoderOptions` can be reused
//! for every file a caller decodes.

/// Decoder options
///
/// Options are set via builder style setters
/// ```
/// use imageops_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_strict_mode(true);
///
/// assert_eq!(options.get_max_width(), 1024);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Treat recoverable irregularities as errors
    ///
    /// When false, the irregularity is logged via the `warn` macro
    /// and decoding continues.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Options used by the command line
    ///
    /// Same limits as the default but never strict, the
    /// command line surfaces irregularities as warnings.
    #[must_use]
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(false)
    }
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    #[must_use]
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    #[must_use]
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true if the decoder should reject irregular input
    #[must_use]
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode
    ///
    /// In strict mode trailing data and samples above the declared
    /// maximum value are rejected.
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
