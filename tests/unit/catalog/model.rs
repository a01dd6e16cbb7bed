use serde_json::json;

use super::*;

fn draft() -> ProjectDraft {
    ProjectDraft {
        title: "Phoenix".to_string(),
        theme: "Fruits & Phoenix".to_string(),
        style_lock: "Bright, glossy".to_string(),
        ..ProjectDraft::default()
    }
}

#[test]
fn new_project_has_identity_and_defaults() {
    let a = Project::new(draft()).unwrap();
    let b = Project::new(draft()).unwrap();
    assert_ne!(a.id, b.id);
    assert!(uuid::Uuid::parse_str(&a.id).is_ok());
    assert!(a.created_at > 0.0);
    assert!(a.assets.is_empty());
    assert_eq!(a.reels, 5);
    assert_eq!(a.rows, 3);
    assert_eq!(a.preview_config, default_preview_config(Orientation::Landscape));
    assert_eq!(a.canvas(), Size::new(1440, 810));
}

#[test]
fn new_project_rejects_grid_out_of_range() {
    for (reels, rows) in [(2, 3), (8, 3), (5, 2), (5, 7)] {
        let err = Project::new(ProjectDraft {
            reels,
            rows,
            ..draft()
        })
        .unwrap_err();
        assert!(matches!(err, ReelError::Validation(_)), "{reels}x{rows}");
    }
    Project::new(ProjectDraft {
        reels: 7,
        rows: 6,
        ..draft()
    })
    .unwrap();
}

#[test]
fn new_project_rejects_bad_layout_override() {
    let mut cfg = default_preview_config(Orientation::Landscape);
    cfg.reel_window = Some(crate::foundation::core::Rect::new(1200, 0, 640, 420));
    let err = Project::new(ProjectDraft {
        preview_config: Some(cfg),
        ..draft()
    })
    .unwrap_err();
    assert!(matches!(err, ReelError::InvalidLayout(_)));
}

#[test]
fn asset_new_defaults_meta_and_identity() {
    let a = Asset::new(AssetCategory::Frame, "frame-1.png", "assets/Frame/frame-1.png");
    assert!(a.meta.is_empty());
    assert!(a.prompt.is_empty());
    assert!(a.created_at > 0.0);

    let mut meta = serde_json::Map::new();
    meta.insert("n".to_string(), json!(2));
    let b = Asset::new(AssetCategory::Frame, "f", "p")
        .with_prompt("ornate")
        .with_origin("OpenAI", "gpt-image-1")
        .with_meta(meta);
    assert_ne!(a.id, b.id);
    assert_eq!(b.provider, "OpenAI");
    assert_eq!(b.meta["n"], json!(2));
}

#[test]
fn serialization_is_a_direct_structural_mapping() {
    let mut p = Project::new(draft()).unwrap();
    p.prepend_asset(Asset::new(AssetCategory::Symbols, "s.png", "assets/Symbols/s.png"));
    let v = serde_json::to_value(&p).unwrap();
    let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
    for k in [
        "id",
        "title",
        "theme",
        "style_lock",
        "reels",
        "rows",
        "orientation",
        "created_at",
        "preview_config",
        "assets",
    ] {
        assert!(keys.contains(&k), "missing key {k}");
    }
    let asset = &v["assets"][0];
    for k in [
        "id",
        "category",
        "name",
        "prompt",
        "provider",
        "model",
        "created_at",
        "path",
        "meta",
    ] {
        assert!(asset.get(k).is_some(), "missing asset key {k}");
    }
    assert_eq!(asset["category"], json!("Symbols"));

    let back: Project = serde_json::from_value(v).unwrap();
    assert_eq!(back, p);
}

#[test]
fn deserialization_substitutes_documented_defaults() {
    let p: Project = serde_json::from_value(json!({"id": "abc"})).unwrap();
    assert_eq!(p.title, "abc");
    assert_eq!(p.theme, "");
    assert_eq!(p.style_lock, "");
    assert_eq!(p.reels, 5);
    assert_eq!(p.rows, 3);
    assert_eq!(p.orientation, Orientation::Landscape);
    assert_eq!(p.created_at, 0.0);
    assert_eq!(p.preview_config, PreviewConfig::default());
    assert!(p.assets.is_empty());
}

#[test]
fn orientation_falls_back_to_preview_config() {
    let p: Project = serde_json::from_value(json!({
        "id": "abc",
        "preview_config": {"orientation": "Portrait"}
    }))
    .unwrap();
    assert_eq!(p.orientation, Orientation::Portrait);
    assert_eq!(p.canvas(), Size::new(810, 1440));

    let p: Project = serde_json::from_value(json!({
        "id": "abc",
        "orientation": "Landscape",
        "preview_config": {"orientation": "Portrait"}
    }))
    .unwrap();
    assert_eq!(p.orientation, Orientation::Landscape);
}

#[test]
fn blank_or_null_orientation_falls_through() {
    for top in [json!(""), json!("  "), json!(null)] {
        let p: Project = serde_json::from_value(json!({
            "id": "abc",
            "orientation": top,
            "preview_config": {"orientation": "Portrait"}
        }))
        .unwrap();
        assert_eq!(p.orientation, Orientation::Portrait, "{top}");
    }

    let p: Project = serde_json::from_value(json!({
        "id": "abc",
        "orientation": "",
        "preview_config": {"orientation": ""}
    }))
    .unwrap();
    assert_eq!(p.orientation, Orientation::Landscape);
    assert_eq!(p.preview_config.orientation, None);

    let bad = serde_json::from_value::<Project>(json!({"id": "abc", "orientation": "Sideways"}));
    assert!(bad.is_err());
}

#[test]
fn missing_id_is_rejected() {
    let err = serde_json::from_value::<Project>(json!({"title": "x"})).unwrap_err();
    assert!(err.to_string().contains("no 'id'"));
}

#[test]
fn latest_and_assets_in_follow_newest_first_order() {
    let mut p = Project::new(draft()).unwrap();
    let old = Asset::new(AssetCategory::Frame, "old", "assets/Frame/old.png");
    let sym = Asset::new(AssetCategory::Symbols, "s", "assets/Symbols/s.png");
    let new = Asset::new(AssetCategory::Frame, "new", "assets/Frame/new.png");
    p.prepend_asset(old.clone());
    p.prepend_asset(sym);
    p.prepend_asset(new.clone());

    assert_eq!(p.latest(AssetCategory::Frame).unwrap().id, new.id);
    assert!(p.latest(AssetCategory::Background).is_none());
    let frames: Vec<&str> = p
        .assets_in(AssetCategory::Frame)
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(frames, vec!["new", "old"]);
}
