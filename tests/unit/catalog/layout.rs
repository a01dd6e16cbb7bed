use serde_json::json;

use super::*;

#[test]
fn landscape_and_portrait_defaults() {
    let l = default_preview_config(Orientation::Landscape).resolve(Orientation::Landscape);
    assert_eq!(l.canvas, Size::new(1440, 810));
    assert_eq!(l.reel_window, Rect::new(400, 170, 640, 420));
    assert_eq!(l.frame, l.reel_window);
    assert_eq!(l.background, Rect::new(0, 0, 1440, 810));
    l.validate().unwrap();

    let p = default_preview_config(Orientation::Portrait).resolve(Orientation::Portrait);
    assert_eq!(p.canvas, Size::new(810, 1440));
    assert_eq!(p.reel_window, Rect::new(185, 360, 440, 720));
    p.validate().unwrap();
}

#[test]
fn default_config_serializes_with_short_rect_keys() {
    let v = serde_json::to_value(default_preview_config(Orientation::Landscape)).unwrap();
    assert_eq!(v["orientation"], json!("Landscape"));
    assert_eq!(v["canvas"], json!({"w": 1440, "h": 810}));
    assert_eq!(v["reel_window"], json!({"x": 400, "y": 170, "w": 640, "h": 420}));
}

#[test]
fn empty_mapping_resolves_to_orientation_default() {
    let cfg: PreviewConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cfg, PreviewConfig::default());
    let layout = cfg.resolve(Orientation::Portrait);
    assert_eq!(layout.canvas, Size::new(810, 1440));
    assert_eq!(serde_json::to_value(&cfg).unwrap(), json!({}));
}

#[test]
fn legacy_orientation_unaware_config_reads_as_landscape() {
    let cfg: PreviewConfig = serde_json::from_value(json!({
        "canvas": {"w": 1440, "h": 810},
        "reel_window": {"x": 400, "y": 170, "w": 640, "h": 420},
        "safe_zone": [1, 2, 3]
    }))
    .unwrap();
    assert_eq!(cfg.orientation, None);
    assert_eq!(cfg.extra["safe_zone"], json!([1, 2, 3]));

    let layout = cfg.resolve(Orientation::Landscape);
    assert_eq!(layout.frame, Rect::new(400, 170, 640, 420));

    let back = serde_json::to_value(&cfg).unwrap();
    assert_eq!(back["safe_zone"], json!([1, 2, 3]));
}

#[test]
fn validate_rejects_out_of_canvas_and_empty() {
    let mut layout = default_preview_config(Orientation::Landscape).resolve(Orientation::Landscape);
    layout.reel_window = Rect::new(1000, 170, 640, 420);
    assert!(matches!(layout.validate(), Err(ReelError::InvalidLayout(_))));

    let mut layout = default_preview_config(Orientation::Landscape).resolve(Orientation::Landscape);
    layout.frame = Rect::new(0, 0, 0, 10);
    assert!(matches!(layout.validate(), Err(ReelError::InvalidLayout(_))));

    let mut layout = default_preview_config(Orientation::Landscape).resolve(Orientation::Landscape);
    layout.background = Rect::new(-1, 0, 10, 10);
    assert!(layout.validate().is_err());
}

#[test]
fn orientation_parse_and_display() {
    assert_eq!("portrait".parse::<Orientation>().unwrap(), Orientation::Portrait);
    assert_eq!(Orientation::Landscape.to_string(), "Landscape");
    assert!("square".parse::<Orientation>().is_err());
}
