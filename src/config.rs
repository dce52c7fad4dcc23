use std::path::PathBuf;

/// File name of the card list bundled with the application.
pub const DEFAULT_CATALOG_FILE: &str = "WOT-Scryfall.json";

/// The only legality status rendered as "good"; every other string is "other".
pub const LEGAL_STATUS: &str = "legal";

/// Locator handed to the presentation layer when a card has no image.
pub const PLACEHOLDER_LOCATOR: &str = "";

/// Document type tag Scryfall uses for paginated card lists.
pub const LIST_OBJECT: &str = "list";

/// Keys every catalog document must carry at its root.
pub const REQUIRED_ROOT_KEYS: [&str; 4] = ["object", "total_cards", "has_more", "data"];

pub fn default_catalog_path() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("scryfall-catalog").join(DEFAULT_CATALOG_FILE)
    } else {
        PathBuf::from(DEFAULT_CATALOG_FILE)
    }
}
