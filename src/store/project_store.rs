use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::{
    catalog::{
        category::AssetCategory,
        model::{Asset, MissingAsset, Project, ProjectSummary},
    },
    foundation::error::{ReelError, ReelResult},
    store::paths::{
        ASSETS_DIR, PROJECT_FILE, asset_rel_path, normalize_rel_path, validate_project_id,
    },
};

/// Filesystem persistence for projects: `<root>/<id>/project.json` plus
/// `<root>/<id>/assets/<category>/` bitmap folders.
///
/// Every save rewrites the whole document. There is no locking: two writers on the same project
/// race and the last rename wins.
#[derive(Clone, Debug)]
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    /// Store rooted at `root`; nothing is touched on disk until the first operation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding one subdirectory per project.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of project `id`.
    pub fn project_dir(&self, id: &str) -> ReelResult<PathBuf> {
        validate_project_id(id)?;
        Ok(self.root.join(id))
    }

    /// Create `assets/<category>/` for every category. Idempotent.
    pub fn ensure_dirs(&self, id: &str) -> ReelResult<()> {
        let assets = self.project_dir(id)?.join(ASSETS_DIR);
        for category in AssetCategory::ALL {
            let dir = assets.join(category.as_str());
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("create asset dir '{}'", dir.display()))?;
        }
        Ok(())
    }

    /// Lay out a brand-new project on disk: category folders first, then the document.
    #[tracing::instrument(skip(self, project), fields(project_id = %project.id))]
    pub fn create(&self, project: &Project) -> ReelResult<()> {
        self.ensure_dirs(&project.id)?;
        self.save(project)?;
        tracing::info!(title = %project.title, "created project");
        Ok(())
    }

    /// Serialize the full project (all assets included) over `project.json`.
    #[tracing::instrument(
        skip(self, project),
        fields(project_id = %project.id, assets = project.assets.len())
    )]
    pub fn save(&self, project: &Project) -> ReelResult<()> {
        let dir = self.project_dir(&project.id)?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create project dir '{}'", dir.display()))?;

        let json = serde_json::to_string_pretty(project).context("serialize project")?;
        let path = dir.join(PROJECT_FILE);
        let tmp = dir.join(format!("{PROJECT_FILE}.tmp"));
        std::fs::write(&tmp, json.as_bytes())
            .with_context(|| format!("write '{}'", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("replace '{}'", path.display()))?;

        tracing::debug!(path = %path.display(), "saved project");
        Ok(())
    }

    /// Read and validate `project.json` of project `id`.
    ///
    /// Missing fields take their documented defaults; a missing id or unparsable document is
    /// [`ReelError::MalformedProject`], a layout outside the canvas is
    /// [`ReelError::InvalidLayout`].
    #[tracing::instrument(skip(self))]
    pub fn load(&self, id: &str) -> ReelResult<Project> {
        let path = self.project_dir(id)?.join(PROJECT_FILE);
        if !path.is_file() {
            return Err(ReelError::not_found(id));
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("read '{}'", path.display()))?;
        let project: Project = serde_json::from_str(&text)
            .map_err(|e| ReelError::malformed(format!("{}: {e}", path.display())))?;
        project.layout().validate()?;

        tracing::debug!(assets = project.assets.len(), "loaded project");
        Ok(project)
    }

    /// Summaries of every stored project, newest first.
    ///
    /// Directories without a `project.json` are skipped, as are documents that do not parse.
    #[tracing::instrument(skip(self))]
    pub fn list(&self) -> ReelResult<Vec<ProjectSummary>> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("create store root '{}'", self.root.display()))?;
        let rd = std::fs::read_dir(&self.root)
            .with_context(|| format!("read store root '{}'", self.root.display()))?;

        let mut out = Vec::new();
        for entry in rd {
            let entry = entry.context("read store entry")?;
            let dir = entry.path();
            if !dir.is_dir() {
                continue;
            }
            let doc = dir.join(PROJECT_FILE);
            if !doc.is_file() {
                continue;
            }
            let dir_name = entry.file_name().to_string_lossy().into_owned();
            match read_summary(&doc, &dir_name) {
                Ok(summary) => out.push(summary),
                Err(err) => {
                    tracing::warn!(
                        path = %doc.display(),
                        error = %err,
                        "skipping unreadable project"
                    );
                }
            }
        }

        out.sort_by(|a, b| {
            b.created_at
                .total_cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(out)
    }

    /// Prepend `asset` (newest first) and persist the whole project.
    ///
    /// Paths that are absolute or climb out of the project directory are rejected.
    #[tracing::instrument(
        skip(self, project, asset),
        fields(project_id = %project.id, asset_id = %asset.id)
    )]
    pub fn add_asset(&self, project: &mut Project, asset: Asset) -> ReelResult<()> {
        normalize_rel_path(&asset.path)?;
        project.prepend_asset(asset);
        self.save(project)
    }

    /// Absolute location of an asset's bitmap.
    pub fn resolve_asset_path(&self, project_id: &str, asset: &Asset) -> ReelResult<PathBuf> {
        let rel = normalize_rel_path(&asset.path)?;
        Ok(self.project_dir(project_id)?.join(Path::new(&rel)))
    }

    /// Listed assets whose backing file is absent or whose path cannot be resolved.
    pub fn check_assets(&self, project: &Project) -> ReelResult<Vec<MissingAsset>> {
        let mut missing = Vec::new();
        let dir = self.project_dir(&project.id)?;
        for asset in &project.assets {
            let present = normalize_rel_path(&asset.path)
                .is_ok_and(|rel| dir.join(Path::new(&rel)).is_file());
            if !present {
                missing.push(MissingAsset::of(asset));
            }
        }
        Ok(missing)
    }

    /// Decode an asset's bitmap.
    ///
    /// `None`, logged at `warn`, when the asset has no readable bitmap: an unusable recorded
    /// path, a missing file or undecodable bytes. Only an invalid project id is an error.
    pub fn load_asset_image(
        &self,
        project_id: &str,
        asset: &Asset,
    ) -> ReelResult<Option<RgbaImage>> {
        let dir = self.project_dir(project_id)?;
        let rel = match normalize_rel_path(&asset.path) {
            Ok(rel) => rel,
            Err(err) => {
                tracing::warn!(
                    asset_id = %asset.id,
                    path = %asset.path,
                    error = %err,
                    "unusable asset path"
                );
                return Ok(None);
            }
        };
        let path = dir.join(Path::new(&rel));
        if !path.is_file() {
            tracing::warn!(asset_id = %asset.id, path = %asset.path, "asset file missing");
            return Ok(None);
        }
        match image::open(&path) {
            Ok(img) => Ok(Some(img.to_rgba8())),
            Err(err) => {
                tracing::warn!(
                    asset_id = %asset.id,
                    path = %path.display(),
                    error = %err,
                    "asset image does not decode"
                );
                Ok(None)
            }
        }
    }

    /// Write `image` as PNG to `assets/<category>/<file_name>` and return that relative path.
    pub fn write_asset_image(
        &self,
        project_id: &str,
        category: AssetCategory,
        file_name: &str,
        image: &RgbaImage,
    ) -> ReelResult<String> {
        let rel = asset_rel_path(category, file_name)?;
        let abs = self.project_dir(project_id)?.join(Path::new(&rel));
        if let Some(parent) = abs.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create asset dir '{}'", parent.display()))?;
        }
        image
            .save_with_format(&abs, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", abs.display()))?;
        Ok(rel)
    }
}

fn read_summary(doc: &Path, dir_name: &str) -> anyhow::Result<ProjectSummary> {
    let text = std::fs::read_to_string(doc).with_context(|| format!("read '{}'", doc.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&text).context("parse project json")?;
    let field = |key: &str| raw.get(key).and_then(|v| v.as_str()).map(str::to_string);
    Ok(ProjectSummary {
        id: field("id").unwrap_or_else(|| dir_name.to_string()),
        title: field("title").unwrap_or_else(|| dir_name.to_string()),
        created_at: raw
            .get("created_at")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/store/project_store.rs"]
mod tests;
