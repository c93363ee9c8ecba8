/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "png")]
//! PNG support via zune-png
//!
//! Images are decoded stripped to 8 bits, gray and alpha are handled
//! by [`Image::from_interleaved_u8`]
use log::{debug, trace};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};

use crate::codecs::infer_components;
use crate::errors::ImageErrors;
use crate::image::{Image, NUM_CHANNELS};
use crate::traits::{DecoderTrait, EncoderTrait};

#[derive(Default)]
pub struct PngDecoder;

impl PngDecoder {
    #[must_use]
    pub fn new() -> PngDecoder {
        PngDecoder
    }
}

impl DecoderTrait for PngDecoder {
    fn decode(&mut self, data: &[u8]) -> Result<Image, ImageErrors> {
        let options = DecoderOptions::default().png_set_strip_to_8bit(true);
        let mut decoder = zune_png::PngDecoder::new_with_options(data, options);

        let pixels = decoder.decode_raw()?;

        let (width, height) = decoder
            .get_dimensions()
            .ok_or(ImageErrors::GenericStr("Png dimensions not known after decoding"))?;

        if let Some(colorspace) = decoder.get_colorspace() {
            debug!("Png colorspace: {:?}", colorspace);
        }
        let components = infer_components(pixels.len(), width, height)?;

        trace!("Png {}x{} with {} components", width, height, components);

        Image::from_interleaved_u8(&pixels, width, height, components)
    }

    fn name(&self) -> &'static str {
        "PNG decoder"
    }
}

/// An 8-bit RGB png encoder
#[derive(Default)]
pub struct PngEncoder;

impl PngEncoder {
    #[must_use]
    pub fn new() -> PngEncoder {
        PngEncoder
    }
}

impl EncoderTrait for PngEncoder {
    fn name(&self) -> &'static str {
        "PNG encoder"
    }

    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let (width, height) = image.dimensions();
        let pixels = image.to_rgb8();

        debug_assert_eq!(pixels.len(), width * height * NUM_CHANNELS);

        let options = EncoderOptions::new(width, height, ColorSpace::RGB, BitDepth::Eight);
        let mut encoder = zune_png::PngEncoder::new(&pixels, options);

        Ok(encoder.encode())
    }
}
