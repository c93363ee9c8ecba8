/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A named collection of images
//!
//! The store maps an image name to an [`Image`]. Writing to an existing
//! name replaces the previous image (last write wins) and entries are
//! never removed, they live for as long as the store does.
use std::collections::HashMap;

use log::info;

use crate::errors::ImageErrors;
use crate::image::Image;

/// Image name to image mapping
#[derive(Default, Debug)]
pub struct ImageStore {
    images: HashMap<String, Image>
}

impl ImageStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> ImageStore {
        ImageStore::default()
    }

    /// Store `image` under `name`, replacing whatever was there
    pub fn insert(&mut self, name: impl Into<String>, image: Image) {
        let name = name.into();
        let (width, height) = image.dimensions();

        info!("Storing {}x{} image as {:?}", width, height, name);

        self.images.insert(name, image);
    }

    /// Get the image stored under `name` if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Image> {
        self.images.get(name)
    }

    /// Get the image stored under `name`
    ///
    /// # Errors
    /// [`ImageErrors::ImageNotFound`] if nothing is stored under that name
    pub fn try_get(&self, name: &str) -> Result<&Image, ImageErrors> {
        self.get(name)
            .ok_or_else(|| ImageErrors::ImageNotFound(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Names of all stored images, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ImageErrors;
    use crate::image::Image;
    use crate::store::ImageStore;

    #[test]
    fn last_write_wins() {
        let mut store = ImageStore::new();
        store.insert("a", Image::fill([1, 1, 1], 2, 2));
        store.insert("a", Image::fill([9, 9, 9], 3, 3));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().dimensions(), (3, 3));
    }

    #[test]
    fn missing_image_is_not_found() {
        let store = ImageStore::new();
        assert!(store.get("nope").is_none());
        assert!(matches!(
            store.try_get("nope"),
            Err(ImageErrors::ImageNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn names_are_sorted() {
        let mut store = ImageStore::new();
        store.insert("zebra", Image::new(1, 1));
        store.insert("apple", Image::new(1, 1));
        assert_eq!(store.names(), vec!["apple", "zebra"]);
    }
}
