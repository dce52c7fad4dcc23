//! Card queries over the in-memory catalog.

use std::cmp::Ordering;

use crate::collation::{contains_ignore_case, natural_cmp};
use crate::models::{Card, Catalog, Format, LegalityClass};
use crate::view::SortMode;

// ---------------------------------------------------------------------------
// SearchCardsParams
// ---------------------------------------------------------------------------

/// Parameters for the advanced card search.
///
/// All fields are optional. When `None`, the corresponding filter is skipped.
/// A card whose field is absent never matches a filter on that field.
#[derive(Debug, Clone, Default)]
pub struct SearchCardsParams {
    pub name: Option<String>,
    pub set_code: Option<String>,
    pub colors: Option<Vec<String>>,
    pub type_line: Option<String>,
    pub rarity: Option<String>,
    pub legal_in: Option<Format>,
    pub mana_value: Option<f64>,
    pub mana_value_lte: Option<f64>,
    pub mana_value_gte: Option<f64>,
    pub text: Option<String>,
    pub artist: Option<String>,
    pub keyword: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for the cards of a loaded [`Catalog`].
pub struct CardQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    // -- Grid view ---------------------------------------------------------

    /// The cards the grid shows for the given search text and sort mode.
    ///
    /// See [`visible_cards`].
    pub fn visible(&self, search_text: &str, sort_mode: SortMode) -> Vec<&'a Card> {
        visible_cards(self.catalog, search_text, sort_mode)
    }

    // -- Single card lookup ------------------------------------------------

    /// Retrieve a single card by its Scryfall id.
    pub fn get_by_id(&self, id: &str) -> Option<&'a Card> {
        self.catalog
            .data
            .iter()
            .find(|c| c.id.as_deref() == Some(id))
    }

    // -- Name lookup -------------------------------------------------------

    /// All cards with exactly this name, in catalog order.
    pub fn get_by_name(&self, name: &str) -> Vec<&'a Card> {
        self.catalog
            .data
            .iter()
            .filter(|c| c.name.as_deref() == Some(name))
            .collect()
    }

    // -- Count -------------------------------------------------------------

    /// Number of cards in the catalog.
    pub fn count(&self) -> usize {
        self.catalog.data.len()
    }

    // -- Advanced search ---------------------------------------------------

    /// Search for cards using a set of optional filters.
    ///
    /// Results keep catalog order; `offset` and `limit` apply after filtering.
    pub fn search(&self, params: &SearchCardsParams) -> Vec<&'a Card> {
        let matched = self
            .catalog
            .data
            .iter()
            .filter(|card| matches_params(card, params))
            .skip(params.offset.unwrap_or(0));

        match params.limit {
            Some(limit) => matched.take(limit).collect(),
            None => matched.collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Visible cards
// ---------------------------------------------------------------------------

/// Project a catalog into the ordered, filtered list the grid displays.
///
/// With [`SortMode::Alphabetical`] cards are stably sorted by name using
/// [`natural_cmp`]; unnamed cards go after every named card. A card is kept
/// when `search_text` is empty or its name contains `search_text`
/// case-insensitively, so unnamed cards only show for an empty search.
pub fn visible_cards<'a>(
    catalog: &'a Catalog,
    search_text: &str,
    sort_mode: SortMode,
) -> Vec<&'a Card> {
    let mut cards: Vec<&Card> = catalog.data.iter().collect();

    if sort_mode == SortMode::Alphabetical {
        // slice::sort_by is stable
        cards.sort_by(|a, b| compare_names(a.name.as_deref(), b.name.as_deref()));
    }

    cards.retain(|card| matches_search(card, search_text));
    cards
}

/// Whether a card survives the grid's search filter.
pub fn matches_search(card: &Card, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    card.name
        .as_deref()
        .map(|name| contains_ignore_case(name, search_text))
        .unwrap_or(false)
}

/// Grid order of two card names: natural order, unnamed cards last.
pub fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => natural_cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn matches_params(card: &Card, params: &SearchCardsParams) -> bool {
    if let Some(ref name) = params.name {
        if !field_contains(&card.name, name) {
            return false;
        }
    }
    if let Some(ref set_code) = params.set_code {
        let matches = card
            .set
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case(set_code))
            .unwrap_or(false);
        if !matches {
            return false;
        }
    }
    if let Some(ref colors) = params.colors {
        if card.colors.is_none() || !colors.iter().all(|c| card.has_color(c)) {
            return false;
        }
    }
    if let Some(ref type_line) = params.type_line {
        if !field_contains(&card.type_line, type_line) {
            return false;
        }
    }
    if let Some(ref rarity) = params.rarity {
        let matches = card
            .rarity
            .as_deref()
            .map(|r| r.eq_ignore_ascii_case(rarity))
            .unwrap_or(false);
        if !matches {
            return false;
        }
    }
    if let Some(format) = params.legal_in {
        let legal = card
            .legalities
            .as_ref()
            .and_then(|l| l.get(format))
            .map(|s| LegalityClass::of(s) == LegalityClass::Legal)
            .unwrap_or(false);
        if !legal {
            return false;
        }
    }
    if params.mana_value.is_some()
        || params.mana_value_lte.is_some()
        || params.mana_value_gte.is_some()
    {
        let Some(cmc) = card.cmc else {
            return false;
        };
        if params.mana_value.is_some_and(|mv| cmc != mv) {
            return false;
        }
        if params.mana_value_lte.is_some_and(|mv| cmc > mv) {
            return false;
        }
        if params.mana_value_gte.is_some_and(|mv| cmc < mv) {
            return false;
        }
    }
    if let Some(ref text) = params.text {
        if !field_contains(&card.oracle_text, text) {
            return false;
        }
    }
    if let Some(ref artist) = params.artist {
        if !field_contains(&card.artist, artist) {
            return false;
        }
    }
    if let Some(ref keyword) = params.keyword {
        let matches = card
            .keywords
            .as_ref()
            .map(|ks| ks.iter().any(|k| k.eq_ignore_ascii_case(keyword)))
            .unwrap_or(false);
        if !matches {
            return false;
        }
    }
    true
}

fn field_contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .map(|value| contains_ignore_case(value, needle))
        .unwrap_or(false)
}
