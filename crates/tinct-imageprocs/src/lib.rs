/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `tinct-image`
//!
//! This implements the transforms of the tinct editor, most of them implement
//! the `OperationsTrait` defined by tinct-image and return a new image, leaving the
//! source untouched.
//!
//! # Example
//! - Brighten an image by 50
//! ```
//! use tinct_image::image::Image;
//! use tinct_image::traits::OperationsTrait;
//! use tinct_imageprocs::brighten::Brighten;
//! let image = Image::fill([100, 150, 230], 100, 100);
//! // execute the filter
//! let brighter = Brighten::new(50).execute(&image).unwrap();
//! assert_eq!(brighter.pixel(0, 0), Some([150, 200, 255]));
//! ```
//!
//! Operations that work on several named images at once, and the image store they
//! live in are tied together by [`Session`](crate::session::Session).
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::uninlined_format_args
)]

pub mod brighten;
pub mod channel;
pub mod color_correct;
pub mod color_matrix;
pub mod compress;
pub mod convolve;
pub mod flip;
pub mod histogram;
pub mod histogram_plot;
pub mod levels;
pub mod session;
pub mod split;
