use std::io::Read;

use super::*;
use crate::{AssetCategory, Project, ProjectDraft};

#[test]
fn archive_holds_document_and_assets_with_relative_names() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(tmp.path());
    let p = Project::new(ProjectDraft::default()).unwrap();
    store.create(&p).unwrap();
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
    store
        .write_asset_image(&p.id, AssetCategory::Frame, "f.png", &img)
        .unwrap();

    let bytes = export_project_zip(&store, &p.id).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    assert!(names.contains(&"project.json".to_string()));
    assert!(names.contains(&"assets/Frame/f.png".to_string()));
    assert_eq!(names.len(), 2);

    let mut doc = String::new();
    archive
        .by_name("project.json")
        .unwrap()
        .read_to_string(&mut doc)
        .unwrap();
    assert!(doc.contains(&p.id));
}

#[test]
fn missing_project_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(tmp.path());
    assert!(matches!(
        export_project_zip(&store, "ghost"),
        Err(ReelError::NotFound(_))
    ));
}
