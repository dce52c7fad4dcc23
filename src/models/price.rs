use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Prices — Market prices as published in the export (decimal strings)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_foil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_etched: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eur: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eur_foil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tix: Option<String>,
}

// ---------------------------------------------------------------------------
// PriceCurrency — Which price slot to read
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceCurrency {
    Usd,
    UsdFoil,
    UsdEtched,
    Eur,
    EurFoil,
    Tix,
}

impl Prices {
    /// The raw price string for `currency`.
    pub fn get(&self, currency: PriceCurrency) -> Option<&str> {
        let slot = match currency {
            PriceCurrency::Usd => &self.usd,
            PriceCurrency::UsdFoil => &self.usd_foil,
            PriceCurrency::UsdEtched => &self.usd_etched,
            PriceCurrency::Eur => &self.eur,
            PriceCurrency::EurFoil => &self.eur_foil,
            PriceCurrency::Tix => &self.tix,
        };
        slot.as_deref()
    }

    /// The price for `currency` as a number.
    ///
    /// Absent or unparseable prices yield `None`, never `0.0`.
    pub fn amount(&self, currency: PriceCurrency) -> Option<f64> {
        self.get(currency)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }
}
