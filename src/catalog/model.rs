use crate::{
    catalog::{
        category::AssetCategory,
        layout::{
            Orientation, PreviewConfig, PreviewLayout, default_preview_config,
            deserialize_optional_orientation,
        },
    },
    foundation::{
        core::{Size, now_epoch_secs},
        error::{ReelError, ReelResult},
    },
};

/// Reels accepted when creating a project.
pub const REELS_RANGE: std::ops::RangeInclusive<u32> = 3..=7;
/// Rows accepted when creating a project.
pub const ROWS_RANGE: std::ops::RangeInclusive<u32> = 3..=6;
/// Reel count used when a document does not record one.
pub const DEFAULT_REELS: u32 = 5;
/// Row count used when a document does not record one.
pub const DEFAULT_ROWS: u32 = 3;

/// One stored bitmap and the generation facts that produced it.
///
/// Assets are immutable once recorded; `path` is relative to the owning project directory.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Asset {
    /// Unique identifier (UUID v4 string).
    pub id: String,
    /// Classification of the art.
    pub category: AssetCategory,
    /// Display name, usually the stored file name.
    #[serde(default)]
    pub name: String,
    /// Full prompt sent to the generator.
    #[serde(default)]
    pub prompt: String,
    /// Provider label (free-form).
    #[serde(default)]
    pub provider: String,
    /// Model label (free-form).
    #[serde(default)]
    pub model: String,
    /// Creation time in epoch seconds.
    #[serde(default)]
    pub created_at: f64,
    /// Bitmap location relative to the project directory, e.g. `assets/Frame/frame-1.png`.
    pub path: String,
    /// Open metadata (size hint, requested count, canvas, ...).
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl Asset {
    /// New asset with a fresh id and the current time; prompt/provider/model start empty and
    /// `meta` starts as an empty mapping.
    pub fn new(category: AssetCategory, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            name: name.into(),
            prompt: String::new(),
            provider: String::new(),
            model: String::new(),
            created_at: now_epoch_secs(),
            path: path.into(),
            meta: serde_json::Map::new(),
        }
    }

    /// Set the generation prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set provider and model labels.
    pub fn with_origin(mut self, provider: impl Into<String>, model: impl Into<String>) -> Self {
        self.provider = provider.into();
        self.model = model.into();
        self
    }

    /// Replace the metadata mapping.
    pub fn with_meta(mut self, meta: serde_json::Map<String, serde_json::Value>) -> Self {
        self.meta = meta;
        self
    }
}

/// A listed asset whose backing bitmap is absent on disk.
///
/// Reported next to successful results; never aborts loading or rendering.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MissingAsset {
    /// Id of the dangling asset.
    pub asset_id: String,
    /// Its category.
    pub category: AssetCategory,
    /// The recorded relative path.
    pub path: String,
}

impl MissingAsset {
    pub(crate) fn of(asset: &Asset) -> Self {
        Self {
            asset_id: asset.id.clone(),
            category: asset.category,
            path: asset.path.clone(),
        }
    }
}

/// Creation parameters for [`Project::new`].
#[derive(Clone, Debug)]
pub struct ProjectDraft {
    /// Title shown in listings.
    pub title: String,
    /// Free-text theme.
    pub theme: String,
    /// Style guide prepended to every prompt.
    pub style_lock: String,
    /// Reel count, within [`REELS_RANGE`].
    pub reels: u32,
    /// Row count, within [`ROWS_RANGE`].
    pub rows: u32,
    /// Screen orientation.
    pub orientation: Orientation,
    /// Layout override; `None` uses [`default_preview_config`] for `orientation`.
    pub preview_config: Option<PreviewConfig>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: "My Slot Game".to_string(),
            theme: String::new(),
            style_lock: String::new(),
            reels: DEFAULT_REELS,
            rows: DEFAULT_ROWS,
            orientation: Orientation::Landscape,
            preview_config: None,
        }
    }
}

/// A slot-game art project and its assets, newest first.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawProject")]
pub struct Project {
    /// Unique identifier (UUID v4 string); also the directory name.
    pub id: String,
    /// Title shown in listings.
    pub title: String,
    /// Free-text theme.
    pub theme: String,
    /// Style guide prepended to every prompt.
    pub style_lock: String,
    /// Reel count (grid columns).
    pub reels: u32,
    /// Row count (grid rows).
    pub rows: u32,
    /// Screen orientation.
    pub orientation: Orientation,
    /// Creation time in epoch seconds.
    pub created_at: f64,
    /// Persisted layout mapping.
    pub preview_config: PreviewConfig,
    /// Assets, index 0 is the newest.
    pub assets: Vec<Asset>,
}

impl Project {
    /// Create a project with a fresh id and the current time, and no assets.
    pub fn new(draft: ProjectDraft) -> ReelResult<Self> {
        if !REELS_RANGE.contains(&draft.reels) {
            return Err(ReelError::validation(format!(
                "reels must be within {}..={}, got {}",
                REELS_RANGE.start(),
                REELS_RANGE.end(),
                draft.reels
            )));
        }
        if !ROWS_RANGE.contains(&draft.rows) {
            return Err(ReelError::validation(format!(
                "rows must be within {}..={}, got {}",
                ROWS_RANGE.start(),
                ROWS_RANGE.end(),
                draft.rows
            )));
        }

        let preview_config = draft
            .preview_config
            .unwrap_or_else(|| default_preview_config(draft.orientation));
        preview_config.resolve(draft.orientation).validate()?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            theme: draft.theme,
            style_lock: draft.style_lock,
            reels: draft.reels,
            rows: draft.rows,
            orientation: draft.orientation,
            created_at: now_epoch_secs(),
            preview_config,
            assets: Vec::new(),
        })
    }

    /// Resolved preview geometry.
    pub fn layout(&self) -> PreviewLayout {
        self.preview_config.resolve(self.orientation)
    }

    /// Canvas size new bitmaps are fitted against.
    pub fn canvas(&self) -> Size {
        self.layout().canvas
    }

    /// Newest asset of `category`, if any.
    pub fn latest(&self, category: AssetCategory) -> Option<&Asset> {
        self.assets.iter().find(|a| a.category == category)
    }

    /// Assets of `category`, newest first.
    pub fn assets_in(&self, category: AssetCategory) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(move |a| a.category == category)
    }

    /// Record `asset` as the newest one (index 0).
    pub(crate) fn prepend_asset(&mut self, asset: Asset) {
        self.assets.insert(0, asset);
    }

    /// Listing view of the project.
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing entry for a stored project.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProjectSummary {
    /// Project id.
    pub id: String,
    /// Project title.
    pub title: String,
    /// Creation time in epoch seconds.
    pub created_at: f64,
}

/// Tolerant wire shape of `project.json`; only `id` is mandatory.
#[derive(serde::Deserialize)]
struct RawProject {
    id: Option<String>,
    title: Option<String>,
    theme: Option<String>,
    style_lock: Option<String>,
    reels: Option<u32>,
    rows: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_orientation")]
    orientation: Option<Orientation>,
    created_at: Option<f64>,
    preview_config: Option<PreviewConfig>,
    assets: Option<Vec<Asset>>,
}

impl TryFrom<RawProject> for Project {
    type Error = ReelError;

    fn try_from(raw: RawProject) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ReelError::malformed("project document has no 'id'"))?;
        let preview_config = raw.preview_config.unwrap_or_default();
        let orientation = raw
            .orientation
            .or(preview_config.orientation)
            .unwrap_or_default();

        Ok(Self {
            title: raw.title.unwrap_or_else(|| id.clone()),
            theme: raw.theme.unwrap_or_default(),
            style_lock: raw.style_lock.unwrap_or_default(),
            reels: raw.reels.unwrap_or(DEFAULT_REELS),
            rows: raw.rows.unwrap_or(DEFAULT_ROWS),
            orientation,
            created_at: raw.created_at.unwrap_or(0.0),
            preview_config,
            assets: raw.assets.unwrap_or_default(),
            id,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
