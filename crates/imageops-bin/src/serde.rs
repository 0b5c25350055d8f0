/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information of a probed file
pub struct Metadata {
    file:      OsString,
    width:     usize,
    height:    usize,
    max_value: usize
}

impl Metadata {
    pub fn new(file: OsString, (width, height): (usize, usize), max_value: usize) -> Metadata {
        Metadata {
            file,
            width,
            height,
            max_value
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 4)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("max_value", &self.max_value)?;

        state.end()
    }
}
