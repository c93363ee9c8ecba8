/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing, lookup and encoding errors possible.
///
/// Every error is local to the call that produced it, an image store
/// that saw an error remains usable afterwards.
pub enum ImageErrors {
    /// A parameter was out of its valid range, e.g levels whose
    /// anchors are not ordered or a negative split percentage
    InvalidParameter(String),
    /// No image is stored under the given name
    ImageNotFound(String),
    /// Two images that should have had the same dimensions did not.
    ///
    /// Both tuples are `(width, height)`, the first one is the expected
    /// dimension, the second the one found
    DimensionsMisMatch((usize, usize), (usize, usize)),
    /// The file extension/format is not one we can decode or encode
    UnsupportedFormat(String),
    /// Decoding an image file failed
    ImageDecodeErrors(String),
    #[cfg(feature = "png")]
    PngDecodeErrors(zune_png::error::PngDecodeErrors),
    #[cfg(feature = "jpeg")]
    JpegDecodeErrors(zune_jpeg::errors::DecodeErrors),
    EncodeErrors(ImgEncodeErrors),
    IoErrors(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

/// All errors possible during image encoding
pub enum ImgEncodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    #[cfg(feature = "jpeg")]
    JpegEncodeErrors(jpeg_encoder::EncodingError)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(reason) => {
                writeln!(f, "Invalid parameter: {}", reason)
            }
            Self::ImageNotFound(name) => {
                writeln!(f, "No image named {:?} has been loaded", name)
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::UnsupportedFormat(format) => {
                writeln!(f, "Unsupported image format {:?}", format)
            }
            Self::ImageDecodeErrors(err) => {
                writeln!(f, "Decoding failed: {}", err)
            }
            #[cfg(feature = "png")]
            Self::PngDecodeErrors(ref error) => {
                writeln!(f, "Png decoding failed:{:?}", error)
            }
            #[cfg(feature = "jpeg")]
            Self::JpegDecodeErrors(ref error) => {
                writeln!(f, "Jpeg decoding failed:{:?}", error)
            }
            Self::EncodeErrors(ref err) => writeln!(f, "{:?}", err),
            Self::IoErrors(ref err) => writeln!(f, "I/O error: {}", err),
            Self::GenericString(err) => writeln!(f, "{}", err),
            Self::GenericStr(err) => writeln!(f, "{}", err)
        }
    }
}

impl Debug for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(ref string) => writeln!(f, "{}", string),
            Self::GenericStatic(ref string) => writeln!(f, "{}", string),
            #[cfg(feature = "jpeg")]
            Self::JpegEncodeErrors(ref error) => {
                writeln!(f, "Jpeg encoding failed: {}", error)
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Display for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ImageErrors {}

impl Error for ImgEncodeErrors {}

#[cfg(feature = "png")]
impl From<zune_png::error::PngDecodeErrors> for ImageErrors {
    fn from(from: zune_png::error::PngDecodeErrors) -> Self {
        ImageErrors::PngDecodeErrors(from)
    }
}

#[cfg(feature = "jpeg")]
impl From<zune_jpeg::errors::DecodeErrors> for ImageErrors {
    fn from(from: zune_jpeg::errors::DecodeErrors) -> Self {
        ImageErrors::JpegDecodeErrors(from)
    }
}

#[cfg(feature = "jpeg")]
impl From<jpeg_encoder::EncodingError> for ImgEncodeErrors {
    fn from(from: jpeg_encoder::EncodingError) -> Self {
        ImgEncodeErrors::JpegEncodeErrors(from)
    }
}

impl From<ImgEncodeErrors> for ImageErrors {
    fn from(from: ImgEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
