/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tinct_image::image::{Image, NUM_CHANNELS};
use tinct_imageprocs::color_correct::channel_peaks;
use tinct_imageprocs::histogram::{image_histograms, mean};

/// What `info` prints about a session image
pub struct ImageSummary<'a> {
    name:  &'a str,
    image: &'a Image,
    peaks: [usize; NUM_CHANNELS],
    means: [Option<f64>; NUM_CHANNELS]
}

impl<'a> ImageSummary<'a> {
    pub fn new(name: &'a str, image: &'a Image) -> ImageSummary<'a> {
        ImageSummary {
            name,
            image,
            peaks: channel_peaks(image),
            means: image_histograms(image).map(|histogram| mean(&histogram))
        }
    }
}

impl<'a> Serialize for ImageSummary<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageSummary", 4)?;

        state.serialize_field("name", self.name)?;
        state.serialize_field("image", self.image)?;
        state.serialize_field("peaks", &self.peaks)?;
        state.serialize_field("means", &self.means)?;

        state.end()
    }
}
