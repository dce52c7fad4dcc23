//! Async wrapper around [`CardCatalog`] for use in async runtimes (Tokio, etc.).
//!
//! Loading reads and decodes the whole document, so it runs on the blocking
//! thread pool via [`tokio::task::spawn_blocking`], keeping the async event
//! loop free. Queries go through the same pool and return owned results.
//!
//! # Example
//!
//! ```no_run
//! use scryfall_catalog::{AsyncCardCatalog, SortMode};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let catalog = AsyncCardCatalog::builder()
//!         .path("WOT-Scryfall.json")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let cards = catalog.visible("bolt", SortMode::Alphabetical).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CatalogError, Result};
use crate::models::Card;
use crate::queries::ImageLocator;
use crate::view::SortMode;
use crate::{BoxedLocator, CardCatalog};

// ---------------------------------------------------------------------------
// AsyncCardCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCardCatalog`] instance.
#[derive(Default)]
pub struct AsyncCardCatalogBuilder {
    path: Option<PathBuf>,
    fallback_to_empty: bool,
    locator: Option<BoxedLocator>,
}

impl AsyncCardCatalogBuilder {
    /// Set the catalog document to load.
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Continue with an empty catalog when the load fails.
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

    /// Load the catalog on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncCardCatalog> {
        tokio::task::spawn_blocking(move || {
            let mut builder = CardCatalog::builder();
            if let Some(path) = self.path {
                builder = builder.path(path);
            }
            builder.locator = self.locator;
            let catalog = builder.fallback_to_empty(self.fallback_to_empty).build()?;
            Ok(AsyncCardCatalog {
                inner: Arc::new(catalog),
            })
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCardCatalog
// ---------------------------------------------------------------------------

/// Async wrapper around [`CardCatalog`].
///
/// The catalog is immutable after load, so it is shared through an [`Arc`]
/// without a lock.
#[derive(Clone)]
pub struct AsyncCardCatalog {
    inner: Arc<CardCatalog>,
}

impl AsyncCardCatalog {
    /// Create a new builder for configuring the async catalog.
    pub fn builder() -> AsyncCardCatalogBuilder {
        AsyncCardCatalogBuilder::default()
    }

    /// Wrap an already loaded catalog.
    pub fn from_catalog(catalog: CardCatalog) -> Self {
        Self {
            inner: Arc::new(catalog),
        }
    }

    /// Run a sync catalog operation on the blocking thread pool.
    ///
    /// The closure receives a `&CardCatalog` and must return owned data.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CardCatalog) -> T + Send + 'static,
        T: Send + 'static,
    {
        let catalog = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&catalog))
            .await
            .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))
    }

    /// The grid's cards for a search and sort mode, cloned out of the catalog.
    pub async fn visible(&self, search_text: &str, sort_mode: SortMode) -> Result<Vec<Card>> {
        let search_text = search_text.to_string();
        self.run(move |c| {
            c.cards()
                .visible(&search_text, sort_mode)
                .into_iter()
                .cloned()
                .collect()
        })
        .await
    }

    /// Whether the underlying catalog is an empty stand-in for a failed load.
    pub fn is_degraded(&self) -> bool {
        self.inner.is_degraded()
    }

    /// Borrow the underlying [`CardCatalog`] for synchronous queries.
    pub fn catalog(&self) -> &CardCatalog {
        &self.inner
    }
}
