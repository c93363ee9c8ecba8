/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use log::info;
use tinct_image::codecs::{read, write};
use tinct_image::errors::ImageErrors;
use tinct_image::image::Image;

/// An image file on disk, the format follows the extension
pub struct ImageFile {
    file_path: PathBuf
}

impl ImageFile {
    pub fn new<P: AsRef<Path>>(file_path: P) -> ImageFile {
        ImageFile {
            file_path: file_path.as_ref().to_path_buf()
        }
    }

    pub fn load(&self) -> Result<Image, ImageErrors> {
        let image = read(&self.file_path)?;
        let (width, height) = image.dimensions();

        info!("Read {:?}, {}x{}", self.file_path, width, height);
        Ok(image)
    }

    pub fn save(&self, image: &Image) -> Result<(), ImageErrors> {
        write(&self.file_path, image)?;

        info!("Wrote {:?}", self.file_path);
        Ok(())
    }
}
