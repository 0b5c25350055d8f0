/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Numeric dump of pixel grids
//!
//! Every channel is right aligned in a field of three,
//! each pixel is followed by a single space and each row ends with a newline.
//!
//! ```text
//!   0  0  0 255 10 10
//!  12 13 14   1  2  3
//! ```
use std::fmt::{Display, Formatter};
use std::io::Write;

use crate::grid::{GradientGrid, PixelGrid};

impl Display for PixelGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for pixel in row {
                for value in pixel {
                    write!(f, "{value:>3}")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for GradientGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{value:>4} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write the table form of `grid` to `writer`
///
/// # Errors
/// Any error reported by the writer
pub fn write_table<W: Write>(grid: &PixelGrid, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "{grid}")?;
    writer.flush()
}
