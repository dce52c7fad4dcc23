//! Image locators for cards.
//!
//! The catalog never fetches images. It only hands out locator strings; how
//! (or whether) they are fetched is up to the presentation layer.

use crate::config::PLACEHOLDER_LOCATOR;
use crate::models::{Card, ImageSize};

// ---------------------------------------------------------------------------
// ImageLocator
// ---------------------------------------------------------------------------

/// Resolves the image of a card at a given size.
pub trait ImageLocator {
    fn locator_for(&self, card: &Card, size: ImageSize) -> Option<String>;
}

impl<T: ImageLocator + ?Sized> ImageLocator for Box<T> {
    fn locator_for(&self, card: &Card, size: ImageSize) -> Option<String> {
        (**self).locator_for(card, size)
    }
}

/// Reads locators straight from the card's `image_uris` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageUrisLocator;

impl ImageLocator for ImageUrisLocator {
    fn locator_for(&self, card: &Card, size: ImageSize) -> Option<String> {
        card.image_uris
            .as_ref()
            .and_then(|uris| uris.get(size))
            .map(str::to_string)
    }
}

// ---------------------------------------------------------------------------
// ImageQuery
// ---------------------------------------------------------------------------

/// Query interface for card image locators.
pub struct ImageQuery<L: ImageLocator = ImageUrisLocator> {
    locator: L,
}

impl Default for ImageQuery<ImageUrisLocator> {
    fn default() -> Self {
        Self::new(ImageUrisLocator)
    }
}

impl<L: ImageLocator> ImageQuery<L> {
    /// Create a new `ImageQuery` backed by the given locator.
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    pub fn locator_for(&self, card: &Card, size: ImageSize) -> Option<String> {
        self.locator.locator_for(card, size)
    }

    /// Locator for a grid cell: the normal image, or the placeholder.
    pub fn grid_locator(&self, card: &Card) -> String {
        self.locator_or_placeholder(card, ImageSize::Normal)
    }

    /// Locator for the detail screen: the large image, or the placeholder.
    pub fn detail_locator(&self, card: &Card) -> String {
        self.locator_or_placeholder(card, ImageSize::Large)
    }

    fn locator_or_placeholder(&self, card: &Card, size: ImageSize) -> String {
        self.locator
            .locator_for(card, size)
            .unwrap_or_else(|| PLACEHOLDER_LOCATOR.to_string())
    }
}
