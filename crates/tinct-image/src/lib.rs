/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core types of the tinct image editor
//!
//! This crate contains the pieces every other tinct crate builds on
//!
//! - [`Image`](crate::image::Image): a three channel pixel grid, stored planar
//! - [`ImageStore`](crate::store::ImageStore): the named collection of images an editing
//!   session works on
//! - [`OperationsTrait`](crate::traits::OperationsTrait): the trait every single-image
//!   transform implements
//! - [codecs](crate::codecs): decoders and encoders that turn file bytes into images and back
//!
//! The transforms themselves live in `tinct-imageprocs`.
//!
//! ## Features
//! By default, a feature includes both format decoder and encoder if present.
//!
//!| Feature      | Decoder       | Encoder        |
//!|--------------|---------------|----------------|
//!| ppm          | built in (P3) | built in (P3)  |
//!| png          | zune-png      | zune-png       |
//!| jpeg         | zune-jpeg     | [jpeg-encoder] |
//!
//! - `serde-support`: Serialize image metadata
//!
//! [jpeg-encoder]: https://crates.io/crates/jpeg-encoder
#![allow(clippy::redundant_field_names, clippy::uninlined_format_args)]

pub mod codecs;
pub mod errors;
pub mod image;
mod serde;
pub mod store;
pub mod traits;
