//! Presentation projections: what a grid cell and a detail screen display.
//!
//! Session state (search text, sort mode, detail tab) belongs to the caller
//! and is passed in explicitly on every projection.

use crate::models::{Card, Catalog, LegalityRow};
use crate::queries::cards::visible_cards;
use crate::queries::images::{ImageLocator, ImageQuery};
use crate::queries::legalities::legality_rows;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Grid ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Catalog order, as authored in the source document.
    #[default]
    OriginalOrder,
    /// By name, natural and case-insensitive.
    Alphabetical,
}

/// Which half of the detail screen is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayTab {
    #[default]
    OracleText,
    Legalities,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_text: String,
    pub sort_mode: SortMode,
}

impl ViewState {
    pub fn new(search_text: impl Into<String>, sort_mode: SortMode) -> Self {
        Self {
            search_text: search_text.into(),
            sort_mode,
        }
    }
}

// ---------------------------------------------------------------------------
// GridCell
// ---------------------------------------------------------------------------

/// One cell of the card grid.
///
/// `name` is not unique across a catalog, so cells are identified by
/// `(position, name)` rather than by name alone.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<'a> {
    pub position: usize,
    pub name: Option<&'a str>,
    pub image: String,
    pub card: &'a Card,
}

pub fn grid<'a, L: ImageLocator>(
    catalog: &'a Catalog,
    state: &ViewState,
    images: &ImageQuery<L>,
) -> Vec<GridCell<'a>> {
    visible_cards(catalog, &state.search_text, state.sort_mode)
        .into_iter()
        .enumerate()
        .map(|(position, card)| GridCell {
            position,
            name: card.name.as_deref(),
            image: images.grid_locator(card),
            card,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CardDetail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent<'a> {
    /// Oracle text; `None` means the card has none and the pane stays empty.
    OracleText(Option<&'a str>),
    Legalities(Vec<LegalityRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetail<'a> {
    pub name: Option<&'a str>,
    pub image: String,
    pub content: DetailContent<'a>,
}

pub fn detail<'a, L: ImageLocator>(
    card: &'a Card,
    tab: DisplayTab,
    images: &ImageQuery<L>,
) -> CardDetail<'a> {
    let content = match tab {
        DisplayTab::OracleText => DetailContent::OracleText(card.oracle_text.as_deref()),
        DisplayTab::Legalities => DetailContent::Legalities(legality_rows(card)),
    };
    CardDetail {
        name: card.name.as_deref(),
        image: images.detail_locator(card),
        content,
    }
}
