//! Shared test fixtures for the catalog integration tests.
//!
//! Provides `sample_document()`, a small Scryfall-shaped card list covering
//! named and unnamed cards, accented and numbered names, and cards with and
//! without images and legalities.

#![allow(dead_code)]

use scryfall_catalog::{Card, CardCatalog};
use serde_json::{json, Value};
use std::io::Write;

/// The sample card list as a JSON value. Catalog order is:
///
/// 0. Zombie Lord      3. Ember Hound   6. Éclair Mage
/// 1. Ash Spirit       4. Card 10       7. Eclair Mage
/// 2. (unnamed)        5. Card 2
pub fn sample_document() -> Value {
    json!({
        "object": "list",
        "total_cards": 8,
        "has_more": false,
        "data": [
            {
                "object": "card",
                "id": "card-001",
                "name": "Zombie Lord",
                "lang": "en",
                "mana_cost": "{1}{B}",
                "cmc": 2.0,
                "type_line": "Creature — Zombie",
                "oracle_text": "Other Zombie creatures you control get +1/+1.",
                "colors": ["B"],
                "color_identity": ["B"],
                "keywords": [],
                "set": "woe",
                "set_name": "Wilds of Eldraine",
                "rarity": "rare",
                "artist": "Jane Doe",
                "image_uris": {
                    "small": "https://img.example/small/zombie.jpg",
                    "normal": "https://img.example/normal/zombie.jpg",
                    "large": "https://img.example/large/zombie.jpg"
                },
                "legalities": {
                    "standard": "legal",
                    "modern": "banned"
                },
                "prices": {
                    "usd": "0.25",
                    "eur": "0.19"
                }
            },
            {
                "object": "card",
                "id": "card-002",
                "name": "Ash Spirit",
                "mana_cost": "{R}",
                "cmc": 1.0,
                "type_line": "Creature — Spirit",
                "oracle_text": "Flying",
                "colors": ["R"],
                "color_identity": ["R"],
                "keywords": ["Flying"],
                "set": "wot",
                "rarity": "common",
                "artist": "John Roe",
                "image_uris": {
                    "normal": "https://img.example/normal/ash.jpg"
                },
                "legalities": {
                    "vintage": "restricted",
                    "standard": "not_legal",
                    "commander": "legal",
                    "alchemy": "suspended"
                }
            },
            {
                "object": "card",
                "id": "card-003",
                "set": "wot"
            },
            {
                "object": "card",
                "id": "card-004",
                "name": "Ember Hound",
                "cmc": 3.0,
                "type_line": "Creature — Elemental Dog",
                "colors": ["R", "G"],
                "set": "WOT",
                "rarity": "uncommon",
                "keywords": ["Haste"],
                "legalities": {
                    "standard": "legal",
                    "pioneer": "legal",
                    "modern": "legal"
                }
            },
            {
                "object": "card",
                "id": "card-005",
                "name": "Card 10",
                "cmc": 0.0,
                "type_line": "Artifact",
                "colors": [],
                "set": "wot"
            },
            {
                "object": "card",
                "id": "card-006",
                "name": "Card 2",
                "type_line": "Artifact",
                "set": "wot"
            },
            {
                "object": "card",
                "id": "card-007",
                "name": "Éclair Mage",
                "type_line": "Creature — Human Wizard",
                "colors": ["U"],
                "set": "wot"
            },
            {
                "object": "card",
                "id": "card-008",
                "name": "Eclair Mage",
                "type_line": "Creature — Human Wizard",
                "colors": ["U"],
                "set": "wot"
            }
        ]
    })
}

pub fn sample_bytes() -> Vec<u8> {
    serde_json::to_vec(&sample_document()).unwrap()
}

pub fn sample_catalog() -> CardCatalog {
    CardCatalog::from_bytes(&sample_bytes()).unwrap()
}

/// Build a minimal list document around the given card objects.
pub fn document_with_cards(cards: Vec<Value>) -> Value {
    json!({
        "object": "list",
        "total_cards": cards.len(),
        "has_more": false,
        "data": cards
    })
}

/// Card names in display order; unnamed cards show as `None`.
pub fn names<'a>(cards: &[&'a Card]) -> Vec<Option<&'a str>> {
    cards.iter().map(|c| c.name.as_deref()).collect()
}

/// Card ids in display order.
pub fn ids<'a>(cards: &[&'a Card]) -> Vec<&'a str> {
    cards.iter().map(|c| c.id.as_deref().unwrap()).collect()
}

/// Write bytes to a file inside a fresh temp dir. Keep the `TempDir` alive
/// for the duration of the test.
pub fn write_temp(file_name: &str, bytes: &[u8]) -> (std::path::PathBuf, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file_name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    (path, dir)
}
