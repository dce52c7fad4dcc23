//! Legality query integration tests against the sample catalog.

mod common;

use common::ids;
use scryfall_catalog::models::{Card, Legalities};
use scryfall_catalog::queries::legalities::legality_rows;
use scryfall_catalog::{CatalogError, Format, LegalityClass, LegalityRow};
use std::collections::HashSet;

fn card_with(legalities: Legalities) -> Card {
    Card {
        id: Some("x".into()),
        legalities: Some(legalities),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// legality_rows
// ---------------------------------------------------------------------------

#[test]
fn rows_example_standard_and_modern() {
    let card = card_with(Legalities {
        standard: Some("legal".into()),
        modern: Some("banned".into()),
        ..Default::default()
    });

    let rows = legality_rows(&card);
    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.format_name(), r.status.as_str()))
        .collect();
    assert_eq!(pairs, vec![("modern", "banned"), ("standard", "legal")]);
}

#[test]
fn rows_are_sorted_by_key_not_declaration_order() {
    let catalog = common::sample_catalog();
    let ash = catalog.cards().get_by_id("card-002").unwrap();

    let rows = catalog.legalities().rows(ash);
    let formats: Vec<&str> = rows.iter().map(LegalityRow::format_name).collect();
    assert_eq!(formats, vec!["alchemy", "commander", "standard", "vintage"]);
}

#[test]
fn rows_cover_exactly_the_present_keys() {
    let full = Legalities {
        standard: Some("legal".into()),
        future: Some("legal".into()),
        historic: Some("legal".into()),
        gladiator: Some("legal".into()),
        pioneer: Some("legal".into()),
        explorer: Some("legal".into()),
        modern: Some("legal".into()),
        legacy: Some("legal".into()),
        pauper: Some("not_legal".into()),
        vintage: Some("legal".into()),
        penny: Some("not_legal".into()),
        commander: Some("legal".into()),
        oathbreaker: Some("legal".into()),
        brawl: Some("legal".into()),
        historicbrawl: Some("legal".into()),
        alchemy: Some("legal".into()),
        paupercommander: Some("restricted".into()),
        duel: Some("legal".into()),
        oldschool: Some("not_legal".into()),
        premodern: Some("not_legal".into()),
        predh: Some("not_legal".into()),
    };

    let rows = legality_rows(&card_with(full));
    assert_eq!(rows.len(), 21);

    let keys: Vec<&str> = rows.iter().map(LegalityRow::format_name).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);

    let unique: HashSet<&str> = keys.iter().copied().collect();
    assert_eq!(unique.len(), keys.len());
}

#[test]
fn rows_are_empty_without_legalities() {
    let catalog = common::sample_catalog();
    let unnamed = catalog.cards().get_by_id("card-003").unwrap();
    assert!(legality_rows(unnamed).is_empty());

    let empty_record = card_with(Legalities::default());
    assert!(legality_rows(&empty_record).is_empty());
}

#[test]
fn rows_are_deterministic() {
    let catalog = common::sample_catalog();
    let card = catalog.cards().get_by_id("card-004").unwrap();
    assert_eq!(legality_rows(card), legality_rows(card));
}

// ---------------------------------------------------------------------------
// LegalityClass
// ---------------------------------------------------------------------------

#[test]
fn only_exact_legal_is_legal_class() {
    assert_eq!(LegalityClass::of("legal"), LegalityClass::Legal);
    for status in ["not_legal", "banned", "restricted", "suspended", "Legal", "legal ", ""] {
        assert_eq!(LegalityClass::of(status), LegalityClass::Other, "{status:?}");
    }
}

#[test]
fn row_class_follows_status() {
    let catalog = common::sample_catalog();
    let ash = catalog.cards().get_by_id("card-002").unwrap();

    let classes: Vec<(&str, LegalityClass)> = catalog
        .legalities()
        .rows(ash)
        .iter()
        .map(|r| (r.format_name(), r.class()))
        .collect();
    assert_eq!(
        classes,
        vec![
            ("alchemy", LegalityClass::Other),
            ("commander", LegalityClass::Legal),
            ("standard", LegalityClass::Other),
            ("vintage", LegalityClass::Other),
        ]
    );
}

// ---------------------------------------------------------------------------
// is_legal / status
// ---------------------------------------------------------------------------

#[test]
fn is_legal_checks_exact_status() {
    let catalog = common::sample_catalog();
    let lq = catalog.legalities();
    let zombie = catalog.cards().get_by_id("card-001").unwrap();

    assert!(lq.is_legal(zombie, Format::Standard));
    assert!(!lq.is_legal(zombie, Format::Modern));
    assert!(!lq.is_legal(zombie, Format::Vintage));
}

#[test]
fn status_returns_raw_string() {
    let catalog = common::sample_catalog();
    let lq = catalog.legalities();
    let ash = catalog.cards().get_by_id("card-002").unwrap();

    assert_eq!(lq.status(ash, Format::Alchemy), Some("suspended"));
    assert_eq!(lq.status(ash, Format::Pioneer), None);
}

// ---------------------------------------------------------------------------
// legal_in / banned_in / restricted_in / not_legal_in
// ---------------------------------------------------------------------------

#[test]
fn legal_in_returns_cards_in_catalog_order() {
    let catalog = common::sample_catalog();
    let lq = catalog.legalities();

    assert_eq!(ids(&lq.legal_in(Format::Standard)), vec!["card-001", "card-004"]);
    assert_eq!(ids(&lq.legal_in(Format::Commander)), vec!["card-002"]);
    assert!(lq.legal_in(Format::Predh).is_empty());
}

#[test]
fn banned_restricted_not_legal_in() {
    let catalog = common::sample_catalog();
    let lq = catalog.legalities();

    assert_eq!(ids(&lq.banned_in(Format::Modern)), vec!["card-001"]);
    assert_eq!(ids(&lq.restricted_in(Format::Vintage)), vec!["card-002"]);
    assert_eq!(ids(&lq.not_legal_in(Format::Standard)), vec!["card-002"]);
    assert_eq!(ids(&lq.with_status(Format::Alchemy, "suspended")), vec!["card-002"]);
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

#[test]
fn format_keys_match_export_field_names() {
    let keys: Vec<&str> = Format::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "standard",
            "future",
            "historic",
            "gladiator",
            "pioneer",
            "explorer",
            "modern",
            "legacy",
            "pauper",
            "vintage",
            "penny",
            "commander",
            "oathbreaker",
            "brawl",
            "historicbrawl",
            "alchemy",
            "paupercommander",
            "duel",
            "oldschool",
            "premodern",
            "predh",
        ]
    );
}

#[test]
fn format_parses_its_own_key() {
    for format in Format::ALL {
        assert_eq!(format.as_str().parse::<Format>().unwrap(), format);
        assert_eq!(format.to_string(), format.as_str());
    }
}

#[test]
fn unknown_format_is_invalid_argument() {
    let err = "timeless".parse::<Format>().unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

#[test]
fn every_format_reads_its_own_field() {
    let catalog = common::sample_catalog();
    let ember = catalog.cards().get_by_id("card-004").unwrap();
    let legalities = ember.legalities.as_ref().unwrap();

    let present: Vec<Format> = Format::ALL
        .iter()
        .copied()
        .filter(|f| legalities.get(*f).is_some())
        .collect();
    assert_eq!(present, vec![Format::Standard, Format::Pioneer, Format::Modern]);
}
