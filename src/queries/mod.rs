//! Query modules for the card catalog.
//!
//! Each module provides a query struct that borrows the loaded
//! [`Catalog`](crate::models::Catalog) and exposes pure methods over it.
//! None of them can fail: absent card data is handled by the documented
//! inclusion rules of each query.

pub mod cards;
pub mod images;
pub mod legalities;

pub use cards::{visible_cards, CardQuery, SearchCardsParams};
pub use images::{ImageLocator, ImageQuery, ImageUrisLocator};
pub use legalities::{legality_rows, LegalityQuery};
