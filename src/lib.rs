//! Reelcraft manages slot-game art projects: a catalog of generated bitmaps per project,
//! normalization of those bitmaps to the project canvas, and a flattened preview of the game
//! screen built from the newest assets.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: an [`ImageGenerator`] returns raw bitmaps for a prompt built from the
//!    project's theme and style lock ([`generate_assets`], [`extract_from_mockup`]).
//! 2. **Fit**: every bitmap is normalized for its [`AssetCategory`] ([`fit_for_category`]):
//!    cover for full-bleed art, contain for overlays, a fixed cell for symbols.
//! 3. **Store**: the PNG lands in `<root>/<project>/assets/<category>/` and the asset record is
//!    prepended to `project.json` ([`ProjectStore`]).
//! 4. **Compose**: background, reel background, symbol grid and frame are flattened into one
//!    canvas-sized image ([`render_project_preview`]).
//!
//! The crate never talks to a network; generation backends plug in through [`ImageGenerator`].
//! Compositing happens on premultiplied RGBA8 and results are returned as straight-alpha
//! [`image::RgbaImage`]s.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod compose;
mod fit;
mod foundation;
mod generate;
mod store;

pub use catalog::category::AssetCategory;
pub use catalog::layout::{Orientation, PreviewConfig, PreviewLayout, default_preview_config};
pub use catalog::model::{
    Asset, DEFAULT_REELS, DEFAULT_ROWS, MissingAsset, Project, ProjectDraft, ProjectSummary,
    REELS_RANGE, ROWS_RANGE,
};
pub use compose::blend::{PremulRgba8, Surface, over, premultiply};
pub use compose::preview::{PreviewInputs, SymbolGrid, render_preview};
pub use compose::project_preview::{PreviewRender, render_project_preview};
pub use fit::image_fit::{
    FitPolicy, SYMBOL_SIZE, fit_contain, fit_cover, fit_exact, fit_for_category, fit_symbol,
};
pub use fit::resample::resample;
pub use foundation::core::{Rect, Size, now_epoch_secs};
pub use foundation::error::{ReelError, ReelResult};
pub use generate::generator::{GenerationRequest, ImageGenerator};
pub use generate::session::Session;
pub use generate::workflow::{
    EXTRACT_SYMBOLS_RANGE, GenerateSpec, UPLOAD_PROVIDER, compose_prompt, default_prompt_body,
    extract_from_mockup, generate_assets, import_asset,
};
pub use store::export::export_project_zip;
pub use store::paths::{
    ASSETS_DIR, PROJECT_FILE, asset_rel_path, normalize_rel_path, validate_project_id,
};
pub use store::project_store::ProjectStore;
