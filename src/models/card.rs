use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::price::Prices;
use super::sub::{ImageUris, Legalities, PurchaseUris, RelatedUris};

// ---------------------------------------------------------------------------
// Card — One entry of a Scryfall card list
// ---------------------------------------------------------------------------

/// A single card record.
///
/// Every field is optional: Scryfall exports are heterogeneous, and an absent
/// field stays `None` rather than decoding to a placeholder (a missing `cmc`
/// is not `0.0`, missing `colors` is not an empty list). Absent fields are
/// skipped on serialization so a decoded card re-encodes to the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    // -- Core identifiers --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiverse_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtgo_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arena_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardmarket_id: Option<i64>,

    // -- Gameplay fields --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scryfall_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highres_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_identity: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legalities: Option<Legalities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foil: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonfoil: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finishes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oversized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<bool>,

    // -- Set fields --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_search_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scryfall_set_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rulings_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prints_search_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    // -- Print fields --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_back_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illustration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_effects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_stamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_art: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_spotlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edhrec_rank: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penny_rank: Option<i64>,

    // -- Commerce fields --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Prices>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_uris: Option<RelatedUris>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_uris: Option<PurchaseUris>,
}

impl Card {
    /// The card name, or an empty string for unnamed cards.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Whether `colors` contains the given single-letter code (e.g. `"R"`).
    ///
    /// Comparison is case-insensitive. A card with no `colors` has no color.
    pub fn has_color(&self, code: &str) -> bool {
        self.colors
            .as_ref()
            .map(|cs| cs.iter().any(|c| c.eq_ignore_ascii_case(code)))
            .unwrap_or(false)
    }

    /// The `colors` codes as an ordered set, or `None` when the field is absent.
    pub fn color_set(&self) -> Option<BTreeSet<&str>> {
        self.colors
            .as_ref()
            .map(|cs| cs.iter().map(String::as_str).collect())
    }
}
