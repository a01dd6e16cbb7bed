use anyhow::Context;
use image::DynamicImage;
use serde_json::json;

use crate::{
    catalog::{
        category::AssetCategory,
        model::{Asset, Project},
    },
    fit::image_fit::fit_for_category,
    foundation::error::{ReelError, ReelResult},
    generate::{
        generator::{GenerationRequest, ImageGenerator},
        session::Session,
    },
    store::project_store::ProjectStore,
};

/// Symbols accepted by [`extract_from_mockup`].
pub const EXTRACT_SYMBOLS_RANGE: std::ops::RangeInclusive<u32> = 6..=14;

/// Provider label recorded on imported bitmaps.
pub const UPLOAD_PROVIDER: &str = "upload";

/// One generation job for a single category.
#[derive(Clone, Debug)]
pub struct GenerateSpec {
    /// Target category.
    pub category: AssetCategory,
    /// Base file name; files become `<name>-<unix_ts>-<idx>.png`.
    pub name: String,
    /// Prompt body; theme and style lock are prepended.
    pub body: String,
    /// Requested image count. Mockups always request one.
    pub count: u32,
}

impl GenerateSpec {
    /// Job with the default prompt body for `category`.
    pub fn new(category: AssetCategory, name: impl Into<String>, count: u32) -> Self {
        let name = name.into();
        Self {
            body: default_prompt_body(category, &name),
            category,
            name,
            count,
        }
    }
}

/// Prefix `body` with the project's theme and style lock.
pub fn compose_prompt(project: &Project, body: &str) -> String {
    format!("{}. {}\n\n{body}", project.theme, project.style_lock)
}

/// Prompt body used when the caller does not write one.
pub fn default_prompt_body(category: AssetCategory, name: &str) -> String {
    match category {
        AssetCategory::Mockups => concat!(
            "Create ONE complete slot game mockup screenshot.\n",
            "Include: background environment + reel window panel + ornate frame overlay + ",
            "reels filled with symbol icons.\n",
            "No UI buttons, no logos, no text labels.\n",
            "Cohesive style, high readability, clean silhouettes, polished casino slot look.\n",
        )
        .to_string(),
        _ => format!("Generate {category} asset: {name}."),
    }
}

/// Generate, fit and record assets for one category.
///
/// Returned assets are in generation order; in the project each is prepended as it is saved,
/// so the last one ends up at index 0. Fewer images than requested are saved as delivered.
#[tracing::instrument(
    skip(store, project, session, generator, spec),
    fields(project_id = %project.id, category = %spec.category)
)]
pub fn generate_assets(
    store: &ProjectStore,
    project: &mut Project,
    session: &Session,
    generator: &dyn ImageGenerator,
    spec: &GenerateSpec,
) -> ReelResult<Vec<Asset>> {
    let (count, transparent) = if spec.category == AssetCategory::Mockups {
        (1, false)
    } else {
        (spec.count, session.transparent_background)
    };
    let prompt = compose_prompt(project, &spec.body);
    run_job(
        store,
        project,
        session,
        generator,
        Job {
            category: spec.category,
            name: &spec.name,
            prompt,
            count,
            transparent,
            source_mockup: None,
        },
    )
}

/// Generate the individual layers matching the newest mockup concept: one background, one reel
/// background, one frame and `symbols` symbols.
#[tracing::instrument(skip(store, project, session, generator), fields(project_id = %project.id))]
pub fn extract_from_mockup(
    store: &ProjectStore,
    project: &mut Project,
    session: &Session,
    generator: &dyn ImageGenerator,
    symbols: u32,
) -> ReelResult<Vec<Asset>> {
    if !EXTRACT_SYMBOLS_RANGE.contains(&symbols) {
        return Err(ReelError::validation(format!(
            "symbol count must be within {}..={}, got {symbols}",
            EXTRACT_SYMBOLS_RANGE.start(),
            EXTRACT_SYMBOLS_RANGE.end()
        )));
    }
    let mockup = project
        .latest(AssetCategory::Mockups)
        .ok_or_else(|| ReelError::validation("no mockup concept found; generate one first"))?;
    let mockup_id = mockup.id.clone();
    let mockup_on_disk = store
        .resolve_asset_path(&project.id, mockup)
        .is_ok_and(|path| path.is_file());
    if !mockup_on_disk {
        tracing::warn!(asset_id = %mockup_id, "mockup file missing on disk");
    }

    let base = compose_prompt(
        project,
        concat!(
            "Match the exact style, materials, palette, lighting, and rendering quality of the ",
            "approved concept.\nNo logos, no text.\n",
        ),
    );
    let overlay_transparent = session.transparent_background;
    let jobs = [
        (
            AssetCategory::Background,
            "background",
            concat!(
                "Generate the BACKGROUND ONLY (no reels, no frame, no symbols). ",
                "Full scene, high quality.",
            ),
            1,
            false,
        ),
        (
            AssetCategory::ReelBackground,
            "reelbg",
            concat!(
                "Generate the REEL BACKGROUND / reel window panel ONLY (no symbols, no frame). ",
                "Subtle texture, readable.",
            ),
            1,
            false,
        ),
        (
            AssetCategory::Frame,
            "frame",
            concat!(
                "Generate the FRAME OVERLAY ONLY. Center must be a clean hole for reels; ",
                "frame is ornate and cohesive.",
            ),
            1,
            overlay_transparent,
        ),
        (
            AssetCategory::Symbols,
            "symbol",
            concat!(
                "Generate ONE slot SYMBOL icon, centered, readable silhouette, glossy render. ",
                "Prefer transparent background if possible.",
            ),
            symbols,
            overlay_transparent,
        ),
    ];

    let mut saved = Vec::new();
    for (category, name, instruction, count, transparent) in jobs {
        let assets = run_job(
            store,
            project,
            session,
            generator,
            Job {
                category,
                name,
                prompt: format!("{base}{instruction}"),
                count,
                transparent,
                source_mockup: Some(&mockup_id),
            },
        )?;
        saved.extend(assets);
    }
    Ok(saved)
}

/// Fit an existing bitmap for `category` and record it as an asset.
pub fn import_asset(
    store: &ProjectStore,
    project: &mut Project,
    category: AssetCategory,
    file_name: &str,
    image: &DynamicImage,
) -> ReelResult<Asset> {
    store.ensure_dirs(&project.id)?;
    let canvas = project.canvas();
    let fitted = fit_for_category(image, category, canvas);
    let rel = store.write_asset_image(&project.id, category, file_name, &fitted)?;

    let mut meta = serde_json::Map::new();
    meta.insert("canvas".to_string(), json!(canvas.to_string()));
    meta.insert("orientation".to_string(), json!(project.orientation.as_str()));
    meta.insert(
        "source_size".to_string(),
        json!(format!("{}x{}", image.width(), image.height())),
    );

    let asset = Asset::new(category, file_name, rel)
        .with_origin(UPLOAD_PROVIDER, "")
        .with_meta(meta);
    store.add_asset(project, asset.clone())?;
    Ok(asset)
}

struct Job<'a> {
    category: AssetCategory,
    name: &'a str,
    prompt: String,
    count: u32,
    transparent: bool,
    source_mockup: Option<&'a str>,
}

fn run_job(
    store: &ProjectStore,
    project: &mut Project,
    session: &Session,
    generator: &dyn ImageGenerator,
    job: Job<'_>,
) -> ReelResult<Vec<Asset>> {
    if job.count == 0 {
        return Err(ReelError::validation("image count must be at least 1"));
    }
    store.ensure_dirs(&project.id)?;

    let request = GenerationRequest {
        prompt: job.prompt,
        model: session.model.clone(),
        count: job.count,
        size_hint: session.size_hint.clone(),
        transparent: job.transparent,
    };
    let images = generator
        .generate(&request)
        .with_context(|| format!("generate {} images", job.category))?;

    let delivered = images.len();
    if delivered < job.count as usize {
        tracing::warn!(
            requested = job.count,
            delivered,
            category = %job.category,
            "generator returned fewer images than requested"
        );
    }

    let canvas = project.canvas();
    let ts = chrono::Utc::now().timestamp();
    let mut saved = Vec::with_capacity(delivered);
    for (idx, img) in images.iter().enumerate() {
        let fitted = fit_for_category(img, job.category, canvas);
        let file_name = format!("{}-{ts}-{}.png", job.name, idx + 1);
        let rel = store.write_asset_image(&project.id, job.category, &file_name, &fitted)?;

        let mut meta = serde_json::Map::new();
        meta.insert("size".to_string(), json!(request.size_hint));
        meta.insert("n".to_string(), json!(job.count));
        meta.insert("delivered".to_string(), json!(delivered));
        meta.insert("canvas".to_string(), json!(canvas.to_string()));
        meta.insert("orientation".to_string(), json!(project.orientation.as_str()));
        if let Some(mockup) = job.source_mockup {
            meta.insert("source_mockup".to_string(), json!(mockup));
        }

        let asset = Asset::new(job.category, file_name, rel)
            .with_prompt(request.prompt.clone())
            .with_origin(session.provider.clone(), session.model.clone())
            .with_meta(meta);
        store.add_asset(project, asset.clone())?;
        saved.push(asset);
    }

    tracing::info!(category = %job.category, saved = saved.len(), "saved generated assets");
    Ok(saved)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/workflow.rs"]
mod tests;
