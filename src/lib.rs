//! Scryfall card catalog.
//!
//! Loads a bundled Scryfall card list (for example `WOT-Scryfall.json`) into
//! a typed, immutable [`Catalog`], and answers the queries a card browser
//! needs: the searchable, sortable grid and the per-card detail view.
//!
//! # Quick start
//!
//! ```no_run
//! use scryfall_catalog::{CardCatalog, SortMode};
//!
//! let catalog = CardCatalog::builder().path("WOT-Scryfall.json").build().unwrap();
//!
//! // Grid contents for a search, sorted by name
//! let cards = catalog.cards().visible("em", SortMode::Alphabetical);
//!
//! // Legality table of the first hit
//! if let Some(card) = cards.first() {
//!     let rows = catalog.legalities().rows(card);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod collation;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod queries;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncCardCatalog;
pub use error::{CatalogError, Result};
pub use models::{Card, Catalog, Format, ImageSize, LegalityClass, LegalityRow};
pub use queries::ImageLocator;
pub use view::{CardDetail, DetailContent, DisplayTab, GridCell, SortMode, ViewState};

use std::fmt;
use std::path::{Path, PathBuf};

use queries::{CardQuery, ImageQuery, ImageUrisLocator, LegalityQuery};

/// The image locator a [`CardCatalog`] hands its projections.
pub type BoxedLocator = Box<dyn ImageLocator + Send + Sync>;

// ---------------------------------------------------------------------------
// CardCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CardCatalog`] instance.
///
/// Use [`CardCatalog::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CardCatalogBuilder::build) to load the
/// catalog.
#[derive(Default)]
pub struct CardCatalogBuilder {
    path: Option<PathBuf>,
    fallback_to_empty: bool,
    locator: Option<BoxedLocator>,
}

impl CardCatalogBuilder {
    /// Set the catalog document to load.
    ///
    /// If not set, [`config::default_catalog_path()`] is used. Paths ending
    /// in `.gz` are decompressed on load.
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Continue with an empty catalog when the load fails.
    ///
    /// The failure is logged and kept: [`CardCatalog::is_degraded()`] returns
    /// `true` and [`CardCatalog::load_error()`] returns the error. Defaults
    /// to `false`, in which case [`build()`](Self::build) returns the error.
    pub fn fallback_to_empty(mut self, fallback: bool) -> Self {
        self.fallback_to_empty = fallback;
        self
    }

    /// Use a custom image locator instead of the card's `image_uris`.
    pub fn image_locator<L>(mut self, locator: L) -> Self
    where
        L: ImageLocator + Send + Sync + 'static,
    {
        self.locator = Some(Box::new(locator));
        self
    }

    /// Load the catalog document.
    pub fn build(self) -> Result<CardCatalog> {
        let path = self.path.unwrap_or_else(config::default_catalog_path);
        let locator = self.locator;

        match loader::load_path(&path) {
            Ok(catalog) => {
                tracing::debug!(path = %path.display(), cards = catalog.len(), "catalog loaded");
                Ok(CardCatalog::assemble(catalog, None, locator))
            }
            Err(e) if self.fallback_to_empty => {
                tracing::error!(path = %path.display(), error = %e, "failed to load catalog, continuing empty");
                Ok(CardCatalog::assemble(Catalog::empty(), Some(e), locator))
            }
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// CardCatalog
// ---------------------------------------------------------------------------

/// The main entry point: a loaded, immutable card catalog.
///
/// Exposes query interfaces as lightweight borrowing wrappers. Session state
/// such as search text and sort mode is passed to each query; the catalog
/// itself never changes after load.
pub struct CardCatalog {
    catalog: Catalog,
    load_error: Option<CatalogError>,
    images: ImageQuery<BoxedLocator>,
}

impl CardCatalog {
    /// Create a new builder for loading a catalog from disk.
    pub fn builder() -> CardCatalogBuilder {
        CardCatalogBuilder::default()
    }

    /// Wrap an already decoded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self::assemble(catalog, None, None)
    }

    /// Decode a catalog document held in memory.
    pub fn from_bytes(document: &[u8]) -> Result<Self> {
        loader::load(document).map(Self::new)
    }

    fn assemble(
        catalog: Catalog,
        load_error: Option<CatalogError>,
        locator: Option<BoxedLocator>,
    ) -> Self {
        let locator = locator.unwrap_or_else(|| Box::new(ImageUrisLocator) as BoxedLocator);
        Self {
            catalog,
            load_error,
            images: ImageQuery::new(locator),
        }
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the card query interface.
    pub fn cards(&self) -> CardQuery<'_> {
        CardQuery::new(&self.catalog)
    }

    /// Access the legality query interface.
    pub fn legalities(&self) -> LegalityQuery<'_> {
        LegalityQuery::new(&self.catalog)
    }

    /// Access the image locator interface.
    pub fn images(&self) -> &ImageQuery<BoxedLocator> {
        &self.images
    }

    // -- Presentation projections ------------------------------------------

    /// The grid cells for the given view state.
    pub fn grid(&self, state: &ViewState) -> Vec<GridCell<'_>> {
        view::grid(&self.catalog, state, &self.images)
    }

    /// The detail screen of `card` with the given tab selected.
    pub fn detail<'a>(&self, card: &'a Card, tab: DisplayTab) -> CardDetail<'a> {
        view::detail(card, tab, &self.images)
    }

    // -- Metadata ----------------------------------------------------------

    /// The decoded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The error that forced an empty fallback catalog, if any.
    pub fn load_error(&self) -> Option<&CatalogError> {
        self.load_error.as_ref()
    }

    /// Whether this catalog is an empty stand-in for a failed load.
    pub fn is_degraded(&self) -> bool {
        self.load_error.is_some()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CardCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CardCatalog(object={}, cards={}, total_cards={}, degraded={})",
            self.catalog.object,
            self.catalog.len(),
            self.catalog.total_cards,
            self.is_degraded()
        )
    }
}
