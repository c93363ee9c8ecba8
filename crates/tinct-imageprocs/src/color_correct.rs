/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Peak based color correction
//!
//! Each channel's histogram peak is searched for in [`PEAK_RANGE`], the three peaks
//! are averaged and every channel is shifted so its peak lands on that average.
//! This neutralizes color casts, e.g a photo with a blue tint has a blue peak
//! brighter than the red and green ones.
use log::debug;
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, MAX_VALUE, NUM_CHANNELS};
use tinct_image::traits::OperationsTrait;

use crate::histogram::{find_peak, image_histograms, BINS, PEAK_RANGE};
use crate::split::{map_pixels, Split};

/// Align the histogram peaks of all channels
#[derive(Copy, Clone, Debug, Default)]
pub struct ColorCorrect {
    split: Split
}

impl ColorCorrect {
    #[must_use]
    pub fn new() -> ColorCorrect {
        ColorCorrect::default()
    }

    /// Only color correct the part of the image left of `split`
    #[must_use]
    pub fn with_split(mut self, split: Split) -> ColorCorrect {
        self.split = split;
        self
    }
}

/// Peaks of each channel within [`PEAK_RANGE`]
#[must_use]
pub fn channel_peaks(image: &Image) -> [usize; NUM_CHANNELS] {
    image_histograms(image).map(|histogram| find_peak(&histogram, PEAK_RANGE.start, PEAK_RANGE.end))
}

/// Build a lookup table shifting every value by `offset`, clamped to `0..=255`
fn shift_table(offset: i32) -> [u16; BINS] {
    let mut table = [0_u16; BINS];

    for (value, entry) in table.iter_mut().enumerate() {
        *entry = (value as i32 + offset).clamp(0, i32::from(MAX_VALUE)) as u16;
    }
    table
}

impl OperationsTrait for ColorCorrect {
    fn name(&self) -> &'static str {
        "Color correct"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let peaks = channel_peaks(image);
        let average_peak = peaks.iter().sum::<usize>() / NUM_CHANNELS;

        debug!("Channel peaks {:?}, average {}", peaks, average_peak);

        let tables = peaks.map(|peak| shift_table(average_peak as i32 - peak as i32));

        Ok(map_pixels(image, self.split, |pixel| {
            let mut out = [0; NUM_CHANNELS];

            for ((out, value), table) in out.iter_mut().zip(pixel).zip(&tables) {
                *out = table[usize::from(value.min(MAX_VALUE))];
            }
            out
        }))
    }
}
