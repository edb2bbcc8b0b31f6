use std::fs;

use folio_core::{AppConfig, Error, Portfolio};
use tempfile::TempDir;

#[test]
fn config_save_then_load_keeps_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.carousel.transition_ms = 900;
    config.ui.theme.name = "nord".to_string();
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.carousel.transition_ms, 900);
    assert_eq!(loaded.ui.theme.name, "nord");
    assert_eq!(loaded.carousel.tiers.len(), 3);
}

#[test]
fn config_with_custom_tiers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[carousel]
render_radius = 1

[[carousel.tiers]]
max_distance = 0
scale = 1.0
opacity = 1.0
blur = 0
layer = 2

[[carousel.tiers]]
max_distance = 1
scale = 0.8
opacity = 0.5
blur = 1
layer = 1
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    let policy = config.carousel.tier_policy().unwrap();
    assert_eq!(policy.bands().len(), 2);
    assert_eq!(policy.render_radius(), 1);
    assert!(policy.tier_of(3, 0, 5).is_none());
}

#[test]
fn config_rejects_unsorted_tiers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[[carousel.tiers]]
max_distance = 0
scale = 1.0
opacity = 1.0
blur = 0
layer = 2

[[carousel.tiers]]
max_distance = 0
scale = 0.8
opacity = 0.5
blur = 1
layer = 1
"#,
    )
    .unwrap();

    assert!(matches!(AppConfig::load_from(&path), Err(Error::Config(_))));
}

#[test]
fn config_rejects_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[carousel\ntransition_ms = ").unwrap();
    assert!(matches!(AppConfig::load_from(&path), Err(Error::Config(_))));
}

#[test]
fn portfolio_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.toml");
    fs::write(
        &path,
        r##"
[profile]
name = "Ada"
roles = ["Engineer"]

[about]
heading = "About"
summary = "Builds things."

[[skills]]
name = "Rust"
color = "#dea584"

[[projects]]
title = "Analytical Engine"
description = "Mechanical computer."
technologies = ["Brass"]
demo = "https://example.com/engine"
kind = "backend"

[contact]
heading = "Contact"
intro = "Say hi."

[[contact.channels]]
kind = "email"
label = "Email"
value = "ada@example.com"
href = "mailto:ada@example.com"
"##,
    )
    .unwrap();

    let portfolio = Portfolio::load(&path).unwrap();
    assert_eq!(portfolio.profile.name, "Ada");
    assert_eq!(portfolio.profile.greeting, "Hello, I'm");
    assert_eq!(portfolio.projects.len(), 1);
    assert_eq!(portfolio.skills[0].color.as_deref(), Some("#dea584"));
}

#[test]
fn portfolio_from_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.json");
    fs::write(&path, Portfolio::default().to_json().unwrap()).unwrap();

    let portfolio = Portfolio::load(&path).unwrap();
    assert_eq!(portfolio.projects.len(), 5);
}

#[test]
fn portfolio_with_bad_demo_link_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.toml");
    fs::write(
        &path,
        r#"
[profile]
name = "Ada"

[about]
heading = "About"
summary = "."

[[projects]]
title = "Broken"
description = "."
demo = "nowhere"
kind = "frontend"

[contact]
heading = "Contact"
intro = "."
"#,
    )
    .unwrap();

    assert!(matches!(Portfolio::load(&path), Err(Error::Content(_))));
}

#[test]
fn portfolio_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Portfolio::load_or_default(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(Portfolio::load_or_default(None).is_ok());
}
