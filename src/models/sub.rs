use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::LEGAL_STATUS;
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// ImageUris
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art_crop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_crop: Option<String>,
}

/// The image renditions Scryfall publishes for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    Small,
    Normal,
    Large,
    Png,
    ArtCrop,
    BorderCrop,
}

impl ImageUris {
    pub fn get(&self, size: ImageSize) -> Option<&str> {
        let slot = match size {
            ImageSize::Small => &self.small,
            ImageSize::Normal => &self.normal,
            ImageSize::Large => &self.large,
            ImageSize::Png => &self.png,
            ImageSize::ArtCrop => &self.art_crop,
            ImageSize::BorderCrop => &self.border_crop,
        };
        slot.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// A game format with a slot in [`Legalities`].
///
/// The set is closed: adding a format means adding a variant here, a field on
/// [`Legalities`], and an arm in [`Legalities::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Standard,
    Future,
    Historic,
    Gladiator,
    Pioneer,
    Explorer,
    Modern,
    Legacy,
    Pauper,
    Vintage,
    Penny,
    Commander,
    Oathbreaker,
    Brawl,
    HistoricBrawl,
    Alchemy,
    PauperCommander,
    Duel,
    OldSchool,
    Premodern,
    Predh,
}

impl Format {
    /// Every format, in the order the export declares them.
    pub const ALL: [Format; 21] = [
        Format::Standard,
        Format::Future,
        Format::Historic,
        Format::Gladiator,
        Format::Pioneer,
        Format::Explorer,
        Format::Modern,
        Format::Legacy,
        Format::Pauper,
        Format::Vintage,
        Format::Penny,
        Format::Commander,
        Format::Oathbreaker,
        Format::Brawl,
        Format::HistoricBrawl,
        Format::Alchemy,
        Format::PauperCommander,
        Format::Duel,
        Format::OldSchool,
        Format::Premodern,
        Format::Predh,
    ];

    /// The key used for this format in catalog documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Standard => "standard",
            Format::Future => "future",
            Format::Historic => "historic",
            Format::Gladiator => "gladiator",
            Format::Pioneer => "pioneer",
            Format::Explorer => "explorer",
            Format::Modern => "modern",
            Format::Legacy => "legacy",
            Format::Pauper => "pauper",
            Format::Vintage => "vintage",
            Format::Penny => "penny",
            Format::Commander => "commander",
            Format::Oathbreaker => "oathbreaker",
            Format::Brawl => "brawl",
            Format::HistoricBrawl => "historicbrawl",
            Format::Alchemy => "alchemy",
            Format::PauperCommander => "paupercommander",
            Format::Duel => "duel",
            Format::OldSchool => "oldschool",
            Format::Premodern => "premodern",
            Format::Predh => "predh",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidArgument(format!("Unknown format: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// Legalities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legalities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gladiator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pioneer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pauper: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vintage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penny: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commander: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oathbreaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brawl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historicbrawl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alchemy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paupercommander: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldschool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premodern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predh: Option<String>,
}

impl Legalities {
    /// Status string for `format`, if the record carries one.
    pub fn get(&self, format: Format) -> Option<&str> {
        let slot = match format {
            Format::Standard => &self.standard,
            Format::Future => &self.future,
            Format::Historic => &self.historic,
            Format::Gladiator => &self.gladiator,
            Format::Pioneer => &self.pioneer,
            Format::Explorer => &self.explorer,
            Format::Modern => &self.modern,
            Format::Legacy => &self.legacy,
            Format::Pauper => &self.pauper,
            Format::Vintage => &self.vintage,
            Format::Penny => &self.penny,
            Format::Commander => &self.commander,
            Format::Oathbreaker => &self.oathbreaker,
            Format::Brawl => &self.brawl,
            Format::HistoricBrawl => &self.historicbrawl,
            Format::Alchemy => &self.alchemy,
            Format::PauperCommander => &self.paupercommander,
            Format::Duel => &self.duel,
            Format::OldSchool => &self.oldschool,
            Format::Premodern => &self.premodern,
            Format::Predh => &self.predh,
        };
        slot.as_deref()
    }

    /// Present `(format, status)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Format, &str)> + '_ {
        Format::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|status| (f, status)))
    }
}

// ---------------------------------------------------------------------------
// LegalityClass / LegalityRow
// ---------------------------------------------------------------------------

/// Display class of a legality status: the exact literal `"legal"` or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalityClass {
    Legal,
    Other,
}

impl LegalityClass {
    pub fn of(status: &str) -> Self {
        if status == LEGAL_STATUS {
            LegalityClass::Legal
        } else {
            LegalityClass::Other
        }
    }
}

/// One line of a card's legality table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalityRow {
    pub format: Format,
    pub status: String,
}

impl LegalityRow {
    pub fn format_name(&self) -> &'static str {
        self.format.as_str()
    }

    pub fn class(&self) -> LegalityClass {
        LegalityClass::of(&self.status)
    }
}

// ---------------------------------------------------------------------------
// RelatedUris
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedUris {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gatherer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer_infinite_articles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer_infinite_decks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edhrec: Option<String>,
}

// ---------------------------------------------------------------------------
// PurchaseUris
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUris {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardmarket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardhoarder: Option<String>,
}
