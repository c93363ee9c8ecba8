/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! The codecs here can be enabled and disabled at will via cargo features.
//!
//! Every decoder produces an 8-bit RGB [`Image`], gray images are expanded
//! to three channels and alpha is dropped. Every encoder consumes the image
//! clamped to `0..=255`.
use std::path::Path;

use log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

pub mod jpeg;
pub mod png;
pub mod ppm;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    /// Joint Photographic Experts Group
    JPEG,
    /// Portable Network Graphics
    PNG,
    /// Plain (ASCII) Portable Pixel Map image
    PPM
}

impl ImageFormat {
    /// Guess the format from a file extension, case insensitive
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<ImageFormat> {
        match extension.to_ascii_lowercase().as_str() {
            "ppm" => Some(ImageFormat::PPM),
            "png" => Some(ImageFormat::PNG),
            "jpg" | "jpeg" => Some(ImageFormat::JPEG),
            _ => None
        }
    }

    /// Guess the format from a path's extension
    ///
    /// # Errors
    /// [`ImageErrors::UnsupportedFormat`] if the path has no extension or
    /// the extension isn't one we know of
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ImageFormat, ImageErrors> {
        let path = path.as_ref();

        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
            .ok_or_else(|| ImageErrors::UnsupportedFormat(path.to_string_lossy().to_string()))
    }

    /// Return a decoder for this format
    ///
    /// # Errors
    /// If support for the format wasn't compiled in
    pub fn decoder(self) -> Result<Box<dyn DecoderTrait>, ImageErrors> {
        match self {
            ImageFormat::PPM => {
                #[cfg(feature = "ppm")]
                {
                    Ok(Box::new(ppm::PPMDecoder::new()))
                }
                #[cfg(not(feature = "ppm"))]
                {
                    Err(ImageErrors::UnsupportedFormat("ppm (feature disabled)".to_string()))
                }
            }
            ImageFormat::PNG => {
                #[cfg(feature = "png")]
                {
                    Ok(Box::new(png::PngDecoder::new()))
                }
                #[cfg(not(feature = "png"))]
                {
                    Err(ImageErrors::UnsupportedFormat("png (feature disabled)".to_string()))
                }
            }
            ImageFormat::JPEG => {
                #[cfg(feature = "jpeg")]
                {
                    Ok(Box::new(jpeg::JpegDecoder::new()))
                }
                #[cfg(not(feature = "jpeg"))]
                {
                    Err(ImageErrors::UnsupportedFormat("jpeg (feature disabled)".to_string()))
                }
            }
        }
    }

    /// Return an encoder for this format
    ///
    /// # Errors
    /// If support for the format wasn't compiled in
    pub fn encoder(self) -> Result<Box<dyn EncoderTrait>, ImageErrors> {
        match self {
            ImageFormat::PPM => {
                #[cfg(feature = "ppm")]
                {
                    Ok(Box::new(ppm::PPMEncoder::new()))
                }
                #[cfg(not(feature = "ppm"))]
                {
                    Err(ImageErrors::UnsupportedFormat("ppm (feature disabled)".to_string()))
                }
            }
            ImageFormat::PNG => {
                #[cfg(feature = "png")]
                {
                    Ok(Box::new(png::PngEncoder::new()))
                }
                #[cfg(not(feature = "png"))]
                {
                    Err(ImageErrors::UnsupportedFormat("png (feature disabled)".to_string()))
                }
            }
            ImageFormat::JPEG => {
                #[cfg(feature = "jpeg")]
                {
                    Ok(Box::new(jpeg::JpegEncoder::new(jpeg::DEFAULT_QUALITY)))
                }
                #[cfg(not(feature = "jpeg"))]
                {
                    Err(ImageErrors::UnsupportedFormat("jpeg (feature disabled)".to_string()))
                }
            }
        }
    }
}

/// Number of interleaved components in a decoded buffer
#[allow(dead_code)]
pub(crate) fn infer_components(
    len: usize, width: usize, height: usize
) -> Result<usize, ImageErrors> {
    let pixels = width * height;

    if pixels == 0 || len % pixels != 0 {
        return Err(ImageErrors::ImageDecodeErrors(format!(
            "Decoded {} bytes which does not fit a {}x{} image",
            len, width, height
        )));
    }
    Ok(len / pixels)
}

/// Decode `data` as an image of format `format`
///
/// # Errors
/// Decoding errors, or an unsupported format
pub fn decode(format: ImageFormat, data: &[u8]) -> Result<Image, ImageErrors> {
    let mut decoder = format.decoder()?;

    trace!("Decoding {} bytes with {}", data.len(), decoder.name());

    decoder.decode(data)
}

/// Encode `image` into format `format`
///
/// # Errors
/// Encoding errors, or an unsupported format
pub fn encode(format: ImageFormat, image: &Image) -> Result<Vec<u8>, ImageErrors> {
    let mut encoder = format.encoder()?;

    trace!("Encoding image with {}", encoder.name());

    encoder.encode(image)
}

/// Read and decode the image at `path`, the format is picked from the extension
///
/// # Errors
/// I/O errors, decoding errors or an unknown extension
pub fn read<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
    let format = ImageFormat::from_path(&path)?;
    let data = std::fs::read(path)?;

    decode(format, &data)
}

/// Encode `image` and write it to `path`, the format is picked from the extension
///
/// # Errors
/// I/O errors, encoding errors or an unknown extension
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> Result<(), ImageErrors> {
    let format = ImageFormat::from_path(&path)?;
    let data = encode(format, image)?;

    std::fs::write(path, data)?;
    Ok(())
}

#[test]
fn test_format_from_path() {
    assert_eq!(ImageFormat::from_path("a/b.PPM").unwrap(), ImageFormat::PPM);
    assert_eq!(ImageFormat::from_path("x.jpeg").unwrap(), ImageFormat::JPEG);
    assert_eq!(ImageFormat::from_path("x.jpg").unwrap(), ImageFormat::JPEG);
    assert_eq!(ImageFormat::from_path("x.png").unwrap(), ImageFormat::PNG);
    assert!(matches!(
        ImageFormat::from_path("x.gif"),
        Err(ImageErrors::UnsupportedFormat(_))
    ));
    assert!(ImageFormat::from_path("noext").is_err());
}

#[test]
fn test_components_must_divide() {
    assert_eq!(infer_components(12, 2, 2).unwrap(), 3);
    assert!(infer_components(13, 2, 2).is_err());
    assert!(infer_components(0, 0, 2).is_err());
}
