use std::sync::Arc;

use arcana_engine::deck::Deck;
use arcana_engine::generator::ReadingGenerator;
use arcana_engine::reading::Reading;
use arcana_engine::selection::TopSelection;
use arcana_engine::shuffle::SecureShuffle;
use arcana_engine::spread::SpreadDefinition;

#[test]
fn reading_serializes_and_deserializes() {
    let deck = Deck::standard(Box::new(SecureShuffle::with_seed(21))).unwrap();
    let mut generator = ReadingGenerator::with_seed(deck, 0.5, 21).unwrap();
    let spread = Arc::new(SpreadDefinition::three_card());
    let reading = generator.generate_reading(&spread, &mut TopSelection, Some("travel".into()));

    let s = serde_json::to_string(&reading).expect("serialize");
    let back: Reading = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(reading, back);
}

#[test]
fn serialized_card_exposes_plain_fields() {
    let deck = Deck::standard(Box::new(SecureShuffle::with_seed(1))).unwrap();
    let tower = deck.get_major_arcana(16).unwrap();
    let value = serde_json::to_value(&*tower).unwrap();
    assert_eq!(value["id"], "major-16");
    assert_eq!(value["arcana"], "major");
    assert_eq!(value["rank"], 16);
    assert_eq!(value["name"], "The Tower");
}

fn sample_reading() -> serde_json::Value {
    let deck = Deck::standard(Box::new(SecureShuffle::with_seed(4))).unwrap();
    let mut generator = ReadingGenerator::with_seed(deck, 0.5, 4).unwrap();
    let spread = Arc::new(SpreadDefinition::three_card());
    let reading = generator.generate_reading(&spread, &mut TopSelection, None);
    serde_json::to_value(&reading).unwrap()
}

#[test]
fn tampered_card_identity_is_rejected() {
    let mut value = sample_reading();
    value["drawn_cards"][0]["card"]["id"] = "minor-cups-03".into();
    assert!(serde_json::from_value::<Reading>(value).is_err());
}

#[test]
fn invalid_card_fields_are_rejected() {
    let mut value = sample_reading();
    value["drawn_cards"][1]["card"]["upright"] = serde_json::json!([]);
    assert!(serde_json::from_value::<Reading>(value).is_err());

    let mut value = sample_reading();
    value["drawn_cards"][0]["card"]["rank"] = 99.into();
    assert!(serde_json::from_value::<Reading>(value).is_err());
}

#[test]
fn invalid_embedded_spread_is_rejected() {
    let mut value = sample_reading();
    value["spread"]["positions"][1]["deal_order"] = 0.into();
    let err = serde_json::from_value::<Reading>(value).unwrap_err();
    assert!(err.to_string().contains("deal order 0"), "{}", err);

    let mut value = sample_reading();
    value["spread"]["layout"][2]["position"] = 42.into();
    assert!(serde_json::from_value::<Reading>(value).is_err());
}
