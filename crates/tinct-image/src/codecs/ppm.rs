/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "ppm")]
//! Plain (`P3`) portable pixel map decoder and encoder
//!
//! The plain variant stores samples as ASCII decimal numbers,
//! whitespace separated, with `#` starting a comment that runs to the end of the line
//!
//! ```text
//! P3
//! # a 2x1 image
//! 2 1
//! 255
//! 255 0 0  0 0 255
//! ```
use std::fmt::Write;

use log::{trace, warn};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

/// A plain PPM decoder
#[derive(Default)]
pub struct PPMDecoder {
    width:  usize,
    height: usize
}

impl PPMDecoder {
    #[must_use]
    pub fn new() -> PPMDecoder {
        PPMDecoder::default()
    }

    /// Dimensions of the last decoded image as `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Split the file into tokens, skipping comments
fn tokens(data: &str) -> impl Iterator<Item = &str> {
    data.lines()
        .map(|line| match line.find('#') {
            Some(pos) => &line[..pos],
            None => line
        })
        .flat_map(str::split_whitespace)
}

fn next_number<'a, I>(tokens: &mut I, what: &str) -> Result<usize, ImageErrors>
where
    I: Iterator<Item = &'a str>
{
    let token = tokens.next().ok_or_else(|| {
        ImageErrors::ImageDecodeErrors(format!("Unexpected end of file while reading {}", what))
    })?;

    token.parse::<usize>().map_err(|_| {
        ImageErrors::ImageDecodeErrors(format!("Invalid {} {:?}, expected a number", what, token))
    })
}

impl DecoderTrait for PPMDecoder {
    fn decode(&mut self, data: &[u8]) -> Result<Image, ImageErrors> {
        let text = std::str::from_utf8(data).map_err(|_| {
            ImageErrors::ImageDecodeErrors("Plain PPM files must be ASCII text".to_string())
        })?;
        let mut tokens = tokens(text);

        match tokens.next() {
            Some("P3") => (),
            Some(magic) => {
                return Err(ImageErrors::ImageDecodeErrors(format!(
                    "Invalid PPM file: plain files should begin with P3, found {:?}",
                    magic
                )))
            }
            None => return Err(ImageErrors::ImageDecodeErrors("Empty PPM file".to_string()))
        }
        let width = next_number(&mut tokens, "width")?;
        let height = next_number(&mut tokens, "height")?;
        let max_value = next_number(&mut tokens, "maximum value")?;

        if max_value == 0 || max_value > usize::from(u16::MAX) {
            return Err(ImageErrors::ImageDecodeErrors(format!(
                "Invalid PPM maximum value {}",
                max_value
            )));
        }
        if max_value != 255 {
            warn!("PPM maximum value is {}, samples will be rescaled to 255", max_value);
        }
        trace!("PPM dimensions: {}x{}, maximum value {}", width, height, max_value);

        let num_samples = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or_else(|| {
                ImageErrors::ImageDecodeErrors(format!(
                    "PPM dimensions {}x{} are too large",
                    width, height
                ))
            })?;

        // samples are checked against the header before allocating
        let samples: Vec<&str> = tokens.collect();

        if samples.len() < num_samples {
            return Err(ImageErrors::ImageDecodeErrors(format!(
                "PPM header expects {} samples, found {}",
                num_samples,
                samples.len()
            )));
        }
        let mut samples = samples.into_iter();
        let mut image = Image::new(width, height);

        for channel_pos in 0..width * height {
            let mut pixel = [0_u16; 3];

            for sample in &mut pixel {
                let value = next_number(&mut samples, "sample")?;

                if value > max_value {
                    return Err(ImageErrors::ImageDecodeErrors(format!(
                        "Sample {} is larger than the maximum value {}",
                        value, max_value
                    )));
                }
                let scaled = if max_value == 255 {
                    value
                } else {
                    (value * 255 + max_value / 2) / max_value
                };
                *sample = scaled as u16;
            }
            image.set_pixel(channel_pos / width, channel_pos % width, pixel);
        }
        self.width = width;
        self.height = height;

        Ok(image)
    }

    fn name(&self) -> &'static str {
        "PPM decoder"
    }
}

/// A plain PPM encoder, samples are written with a maximum value of 255
#[derive(Default)]
pub struct PPMEncoder;

impl PPMEncoder {
    #[must_use]
    pub fn new() -> PPMEncoder {
        PPMEncoder
    }
}

impl EncoderTrait for PPMEncoder {
    fn name(&self) -> &'static str {
        "PPM encoder"
    }

    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let (width, height) = image.dimensions();
        let pixels = image.to_rgb8();

        let mut out = String::with_capacity(pixels.len() * 4 + 20);

        // writing to a string can't fail, map it anyway
        let fmt_err = |_| ImageErrors::GenericStr("Could not format PPM output");

        write!(out, "P3\n{} {}\n255\n", width, height).map_err(fmt_err)?;

        if width > 0 {
            for row in pixels.chunks_exact(width * 3) {
                let line = row
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<String>>()
                    .join(" ");
                writeln!(out, "{}", line).map_err(fmt_err)?;
            }
        }
        Ok(out.into_bytes())
    }
}
