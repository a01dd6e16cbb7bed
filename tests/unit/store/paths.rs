use super::*;
use crate::AssetCategory;

#[test]
fn normalize_path_cross_platform() {
    assert_eq!(
        normalize_rel_path("assets/Frame/a.png").unwrap(),
        "assets/Frame/a.png"
    );
    assert_eq!(
        normalize_rel_path("assets\\Frame\\a.png").unwrap(),
        "assets/Frame/a.png"
    );
    assert_eq!(normalize_rel_path("./assets//a.png").unwrap(), "assets/a.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("C:/x.png").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn project_ids_are_single_segments() {
    validate_project_id("0b7c6a1e-1f5e-4c39-9d3e-2f2b8c1a0d11").unwrap();
    assert!(validate_project_id("").is_err());
    assert!(validate_project_id("..").is_err());
    assert!(validate_project_id("a/b").is_err());
    assert!(validate_project_id("a\\b").is_err());
}

#[test]
fn asset_rel_path_uses_category_folder() {
    assert_eq!(
        asset_rel_path(AssetCategory::Ui, "panel-1.png").unwrap(),
        "assets/UI/panel-1.png"
    );
    assert!(asset_rel_path(AssetCategory::Frame, "../x.png").is_err());
}
