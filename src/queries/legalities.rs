//! Legality queries over the fixed-shape `legalities` record of each card.
//!
//! Formats are enumerated through [`Format::ALL`], never by inspecting the
//! record at runtime, so the set of formats is checked at compile time.

use crate::config::LEGAL_STATUS;
use crate::models::{Card, Catalog, Format, LegalityClass, LegalityRow};

// ---------------------------------------------------------------------------
// LegalityQuery
// ---------------------------------------------------------------------------

/// Query interface for card legalities across all formats.
pub struct LegalityQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> LegalityQuery<'a> {
    /// Create a new `LegalityQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The legality table for a card. See [`legality_rows`].
    pub fn rows(&self, card: &Card) -> Vec<LegalityRow> {
        legality_rows(card)
    }

    /// The raw status string of `card` in `format`, if present.
    pub fn status<'c>(&self, card: &'c Card, format: Format) -> Option<&'c str> {
        card.legalities.as_ref().and_then(|l| l.get(format))
    }

    /// Whether `card` is legal in `format`.
    ///
    /// Only the exact status `"legal"` counts; absent statuses are not legal.
    pub fn is_legal(&self, card: &Card, format: Format) -> bool {
        self.status(card, format)
            .map(|s| LegalityClass::of(s) == LegalityClass::Legal)
            .unwrap_or(false)
    }

    /// Get all cards that are legal in the given format.
    pub fn legal_in(&self, format: Format) -> Vec<&'a Card> {
        self.with_status(format, LEGAL_STATUS)
    }

    /// Get all cards that are banned in the given format.
    pub fn banned_in(&self, format: Format) -> Vec<&'a Card> {
        self.with_status(format, "banned")
    }

    /// Get all cards that are restricted in the given format.
    pub fn restricted_in(&self, format: Format) -> Vec<&'a Card> {
        self.with_status(format, "restricted")
    }

    /// Get all cards that are not legal in the given format.
    pub fn not_legal_in(&self, format: Format) -> Vec<&'a Card> {
        self.with_status(format, "not_legal")
    }

    /// Cards whose status in `format` is exactly `status`, in catalog order.
    pub fn with_status(&self, format: Format, status: &str) -> Vec<&'a Card> {
        self.catalog
            .data
            .iter()
            .filter(|card| self.status(card, format) == Some(status))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Legality rows
// ---------------------------------------------------------------------------

/// Build the legality table for a card.
///
/// One row per format whose status is present, ordered lexicographically by
/// format key. A card without a `legalities` record yields no rows.
pub fn legality_rows(card: &Card) -> Vec<LegalityRow> {
    let Some(legalities) = card.legalities.as_ref() else {
        return Vec::new();
    };

    let mut rows: Vec<LegalityRow> = legalities
        .entries()
        .map(|(format, status)| LegalityRow {
            format,
            status: status.to_string(),
        })
        .collect();
    rows.sort_by_key(|row| row.format.as_str());
    rows
}
