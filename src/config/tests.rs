//! Unit tests for configuration parsing and asset resolution

use crate::config::{AssetKey, AssetMap, PlayerConfig, DEFAULT_SPEED_MS};

#[test]
fn test_defaults() {
    let config = PlayerConfig::default();
    assert!(config.autoplay);
    assert_eq!(config.speed_ms, DEFAULT_SPEED_MS);
    assert!(config.width.is_none());
    assert_eq!(config.assets.resolve(AssetKey::Farmers), "/assets/farmers.png");
    assert_eq!(
        config.assets.resolve(AssetKey::FarmerRobot),
        "/assets/farmer-robot.png"
    );
    assert_eq!(config.assets.resolve(AssetKey::OpenAi), "/assets/openai.png");
}

#[test]
fn test_from_pairs_parses_options() {
    let config = PlayerConfig::from_pairs([
        ("autoplay", "false"),
        ("speed", "2200"),
        ("width", "900"),
    ]);

    assert!(!config.autoplay);
    assert_eq!(config.speed_ms, 2200);
    assert_eq!(config.width, Some(900.0));
}

#[test]
fn test_autoplay_accepts_only_true() {
    // Mirrors the attribute semantics: anything but the literal "true" pauses.
    let config = PlayerConfig::from_pairs([("autoplay", "yes")]);
    assert!(!config.autoplay);

    let config = PlayerConfig::from_pairs([("autoplay", "true")]);
    assert!(config.autoplay);
}

#[test]
fn test_invalid_numbers_fall_back() {
    let config = PlayerConfig::from_pairs([("speed", "fast"), ("width", "wide")]);
    assert_eq!(config.speed_ms, DEFAULT_SPEED_MS);
    assert!(config.width.is_none());
}

#[test]
fn test_nonpositive_numbers_fall_back() {
    let config = PlayerConfig::from_pairs([("speed", "0"), ("width", "-200")]);
    assert_eq!(config.speed_ms, DEFAULT_SPEED_MS);
    assert!(config.width.is_none());
}

#[test]
fn test_asset_overrides() {
    let config = PlayerConfig::from_pairs([
        ("farmers-src", "img/people.png"),
        ("openai-src", "https://cdn.example.com/openai.png"),
    ]);

    assert_eq!(config.assets.resolve(AssetKey::Farmers), "img/people.png");
    assert_eq!(
        config.assets.resolve(AssetKey::OpenAi),
        "https://cdn.example.com/openai.png"
    );
    // Untouched keys keep their defaults.
    assert_eq!(
        config.assets.resolve(AssetKey::FarmerRobot),
        "/assets/farmer-robot.png"
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = PlayerConfig::from_pairs([("volume", "11")]);
    assert_eq!(config.speed_ms, DEFAULT_SPEED_MS);
    assert!(config.autoplay);
}

#[test]
fn test_asset_map_set() {
    let mut assets = AssetMap::default();
    assets.set(AssetKey::FarmerRobot, "robots.svg");
    assert_eq!(assets.resolve(AssetKey::FarmerRobot), "robots.svg");
}
