/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::env::temp_dir;
use std::time::UNIX_EPOCH;

use imageops_image::errors::ImageErrors;
use imageops_image::grid::PixelGrid;
use log::trace;

pub fn open_in_default_app(image: &PixelGrid) -> Result<(), ImageErrors> {
    let time = format!(
        "{}.ppm",
        std::time::SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |x| x.as_secs())
    );
    let mut path = temp_dir();

    path.push(time);

    image.save(&path)?;

    trace!("Wrote image to {:?}", path);
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(&path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(&path)
            .spawn()?;
    }
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(&path).spawn()?;
    }
    Ok(())
}
