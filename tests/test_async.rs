//! Async wrapper tests. Run with `--features async`.

mod common;

use scryfall_catalog::models::Card;
use scryfall_catalog::{AsyncCardCatalog, CardCatalog, CatalogError, ImageLocator, ImageSize, SortMode};

struct IdLocator;

impl ImageLocator for IdLocator {
    fn locator_for(&self, card: &Card, _size: ImageSize) -> Option<String> {
        card.id.as_ref().map(|id| format!("local://{id}"))
    }
}

#[tokio::test]
async fn build_loads_on_blocking_pool() {
    let (path, _tmp) = common::write_temp("catalog.json", &common::sample_bytes());

    let catalog = AsyncCardCatalog::builder().path(&path).build().await.unwrap();
    assert!(!catalog.is_degraded());
    assert_eq!(catalog.catalog().cards().count(), 8);
}

#[tokio::test]
async fn build_propagates_load_errors() {
    let (path, _tmp) = common::write_temp("catalog.json", b"[]");

    let result = AsyncCardCatalog::builder().path(&path).build().await;
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}

#[tokio::test]
async fn build_with_fallback_is_degraded() {
    let (path, _tmp) = common::write_temp("catalog.json", b"[]");

    let catalog = AsyncCardCatalog::builder()
        .path(&path)
        .fallback_to_empty(true)
        .build()
        .await
        .unwrap();
    assert!(catalog.is_degraded());
}

#[tokio::test]
async fn build_uses_custom_image_locator() {
    let (path, _tmp) = common::write_temp("catalog.json", &common::sample_bytes());

    let catalog = AsyncCardCatalog::builder()
        .path(&path)
        .image_locator(IdLocator)
        .build()
        .await
        .unwrap();

    let sync = catalog.catalog();
    let ash = sync.cards().get_by_id("card-002").unwrap();
    assert_eq!(sync.images().grid_locator(ash), "local://card-002");
    assert_eq!(sync.images().detail_locator(ash), "local://card-002");
}

#[tokio::test]
async fn visible_matches_sync_results() {
    let catalog = AsyncCardCatalog::from_catalog(common::sample_catalog());
    let sync = CardCatalog::from_bytes(&common::sample_bytes()).unwrap();

    let cards = catalog.visible("e", SortMode::Alphabetical).await.unwrap();
    let expected: Vec<_> = sync
        .cards()
        .visible("e", SortMode::Alphabetical)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(cards, expected);
}

#[tokio::test]
async fn run_executes_closure() {
    let catalog = AsyncCardCatalog::from_catalog(common::sample_catalog());

    let names = catalog
        .run(|c| {
            c.cards()
                .get_by_name("Ash Spirit")
                .iter()
                .map(|card| card.display_name().to_string())
                .collect::<Vec<_>>()
        })
        .await
        .unwrap();
    assert_eq!(names, vec!["Ash Spirit".to_string()]);
}
