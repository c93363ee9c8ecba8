/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "jpeg")]
//! JPEG support, decoding via zune-jpeg and encoding via jpeg-encoder
use jpeg_encoder::{ColorType, Encoder};
use log::{info, trace};

use crate::codecs::infer_components;
use crate::errors::{ImageErrors, ImgEncodeErrors};
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

/// Quality used when saving jpeg files
pub const DEFAULT_QUALITY: u8 = 90;

#[derive(Default)]
pub struct JpegDecoder;

impl JpegDecoder {
    #[must_use]
    pub fn new() -> JpegDecoder {
        JpegDecoder
    }
}

impl DecoderTrait for JpegDecoder {
    fn decode(&mut self, data: &[u8]) -> Result<Image, ImageErrors> {
        let mut decoder = zune_jpeg::JpegDecoder::new(data);

        let pixels = decoder.decode()?;

        let (width, height) = decoder
            .dimensions()
            .ok_or(ImageErrors::GenericStr("Jpeg dimensions not known after decoding"))?;
        let (width, height) = (usize::from(width), usize::from(height));

        let components = infer_components(pixels.len(), width, height)?;

        trace!("Jpeg {}x{} with {} components", width, height, components);

        Image::from_interleaved_u8(&pixels, width, height, components)
    }

    fn name(&self) -> &'static str {
        "JPEG decoder"
    }
}

/// A baseline jpeg encoder
pub struct JpegEncoder {
    quality: u8
}

impl JpegEncoder {
    /// Create an encoder with `quality`, clamped to `1..=100`
    #[must_use]
    pub fn new(quality: u8) -> JpegEncoder {
        JpegEncoder {
            quality: quality.clamp(1, 100)
        }
    }
}

impl Default for JpegEncoder {
    fn default() -> Self {
        JpegEncoder::new(DEFAULT_QUALITY)
    }
}

impl EncoderTrait for JpegEncoder {
    fn name(&self) -> &'static str {
        "JPEG encoder"
    }

    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let (width, height) = image.dimensions();

        let max_dimension = usize::from(u16::MAX);

        if width > max_dimension || height > max_dimension {
            return Err(ImgEncodeErrors::Generic(format!(
                "Image {}x{} is too large for jpeg, dimensions must be at most {}",
                width, height, max_dimension
            ))
            .into());
        }
        info!("Encoding jpeg with quality {}", self.quality);

        let pixels = image.to_rgb8();
        let mut out = Vec::with_capacity(pixels.len() / 4);

        let encoder = Encoder::new(&mut out, self.quality);

        encoder
            .encode(&pixels, width as u16, height as u16, ColorType::Rgb)
            .map_err(ImgEncodeErrors::from)?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::codecs::jpeg::{JpegDecoder, JpegEncoder};
    use crate::image::Image;
    use crate::traits::{DecoderTrait, EncoderTrait};

    #[test]
    fn jpeg_keeps_flat_colors_close() {
        let image = Image::fill([200, 100, 50], 16, 16);
        let bytes = JpegEncoder::default().encode(&image).unwrap();
        let decoded = JpegDecoder::new().decode(&bytes).unwrap();

        assert_eq!(decoded.dimensions(), (16, 16));

        let [r, g, b] = decoded.pixel(8, 8).unwrap();
        assert!(r.abs_diff(200) <= 4);
        assert!(g.abs_diff(100) <= 4);
        assert!(b.abs_diff(50) <= 4);
    }
}
