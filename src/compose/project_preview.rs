use image::RgbaImage;

use crate::{
    catalog::{
        category::AssetCategory,
        model::{MissingAsset, Project},
    },
    compose::preview::{PreviewInputs, SymbolGrid, render_preview},
    foundation::error::ReelResult,
    store::project_store::ProjectStore,
};

/// Flattened project preview plus the assets that could not be drawn.
#[derive(Clone, Debug)]
pub struct PreviewRender {
    /// Straight-alpha RGBA image of the full canvas.
    pub image: RgbaImage,
    /// Listed layer or symbol assets whose files are absent.
    pub missing: Vec<MissingAsset>,
}

/// Render the preview screen of `project` from its newest stored assets.
///
/// Each single layer (background, reel background, frame) uses the newest asset whose file
/// exists; the symbol grid cycles through every existing symbol, newest first, to fill
/// `rows x reels` cells. Missing or unreadable files are reported, not fatal.
#[tracing::instrument(skip(store, project), fields(project_id = %project.id))]
pub fn render_project_preview(
    store: &ProjectStore,
    project: &Project,
) -> ReelResult<PreviewRender> {
    let layout = project.layout();
    let mut missing = Vec::new();

    let background = newest_existing(store, project, AssetCategory::Background, &mut missing)?;
    let reel_background =
        newest_existing(store, project, AssetCategory::ReelBackground, &mut missing)?;
    let frame = newest_existing(store, project, AssetCategory::Frame, &mut missing)?;

    let mut symbols = Vec::new();
    for asset in project.assets_in(AssetCategory::Symbols) {
        match store.load_asset_image(&project.id, asset)? {
            Some(img) => symbols.push(img),
            None => missing.push(MissingAsset::of(asset)),
        }
    }

    let inputs = PreviewInputs {
        canvas: layout.canvas,
        background_rect: layout.background,
        reel_window: layout.reel_window,
        frame_rect: layout.frame,
        background: background.as_ref(),
        reel_background: reel_background.as_ref(),
        symbols: SymbolGrid::cycle(&symbols, project.rows, project.reels),
        frame: frame.as_ref(),
    };
    let image = render_preview(&inputs);

    if !missing.is_empty() {
        tracing::warn!(missing = missing.len(), "preview rendered with missing asset files");
    }
    Ok(PreviewRender { image, missing })
}

fn newest_existing(
    store: &ProjectStore,
    project: &Project,
    category: AssetCategory,
    missing: &mut Vec<MissingAsset>,
) -> ReelResult<Option<RgbaImage>> {
    for asset in project.assets_in(category) {
        match store.load_asset_image(&project.id, asset)? {
            Some(img) => return Ok(Some(img)),
            None => missing.push(MissingAsset::of(asset)),
        }
    }
    Ok(None)
}
