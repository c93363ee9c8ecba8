/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image by a constant
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, MAX_VALUE};
use tinct_image::traits::OperationsTrait;

/// Add `value` to every channel, clamping the result to `0..=255`
///
/// Negative values darken the image
#[derive(Copy, Clone, Debug)]
pub struct Brighten {
    value: i32
}

impl Brighten {
    #[must_use]
    pub fn new(value: i32) -> Brighten {
        Brighten { value }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut new_image = image.clone();

        for channel in new_image.channels_mut() {
            brighten(channel, self.value, MAX_VALUE);
        }
        Ok(new_image)
    }
}

pub fn brighten(channel: &mut [u16], value: i32, max_value: u16) {
    channel
        .iter_mut()
        .for_each(|x| *x = (i32::from(*x) + value).clamp(0, i32::from(max_value)) as u16);
}
