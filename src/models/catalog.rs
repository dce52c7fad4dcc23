use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::config::LIST_OBJECT;

// ---------------------------------------------------------------------------
// Catalog — Root of a card list document
// ---------------------------------------------------------------------------

/// The decoded card list plus its document metadata.
///
/// `data` keeps the order of the source document; that order is the
/// "original order" view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub object: String,
    pub total_cards: i64,
    pub has_more: bool,
    pub data: Vec<Card>,
}

impl Catalog {
    /// An empty list document, used when a load failed and the caller opted
    /// to continue without cards.
    pub fn empty() -> Self {
        Self {
            object: LIST_OBJECT.to_string(),
            total_cards: 0,
            has_more: false,
            data: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
