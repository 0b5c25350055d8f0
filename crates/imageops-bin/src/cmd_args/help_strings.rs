/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static GRAYSCALE_HELP: &str = "Convert the image to grayscale

Every pixel is replaced by 0.2126*r + 0.7152*g + 0.722*b,
truncated and written to all three channels.
Bright pixels may end up above 255.";

pub static BLUR_HELP: &str = "Blur the image with a 3x3 average

Each pixel becomes the truncated mean of itself and its neighbours.
By default the first column is black and the last column keeps the
source pixels from the second row on, pass --full-borders to average them too.";

pub static EDGES_HELP: &str = "Replace the image with its horizontal edges

The image is converted to grayscale, differentiated along each row
and the differences are rescaled into the range [0, max].";

pub static FULL_BORDERS_HELP: &str = "Compute the border columns of blur and edges

Without this, blur and edges keep the output of earlier versions
on the first and the last column of the image.";

pub static PROBE_HELP: &str = "Print information about the input file and exit

The information is printed as JSON, only the file header is read.";
