use crate::foundation::error::{ReelError, ReelResult};

/// Name of the serialized project document inside a project directory.
pub const PROJECT_FILE: &str = "project.json";
/// Directory (relative to the project directory) holding one subfolder per category.
pub const ASSETS_DIR: &str = "assets";

/// Normalize and validate project-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> ReelResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ReelError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(ReelError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ReelError::validation("asset paths must not contain '..'"));
        }
        if part.contains(':') && out.is_empty() {
            return Err(ReelError::validation("asset paths must not carry a drive prefix"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ReelError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

/// Project ids name a single directory under the store root.
pub fn validate_project_id(id: &str) -> ReelResult<()> {
    if id.trim().is_empty() {
        return Err(ReelError::validation("project id must be non-empty"));
    }
    if id == "." || id == ".." || id.contains(['/', '\\', ':']) {
        return Err(ReelError::validation(format!(
            "project id '{id}' must be a single path segment"
        )));
    }
    Ok(())
}

/// Conventional relative path for a new asset file: `assets/<category>/<file_name>`.
pub fn asset_rel_path(category: crate::AssetCategory, file_name: &str) -> ReelResult<String> {
    if file_name.contains(['/', '\\']) {
        return Err(ReelError::validation(format!(
            "asset file name '{file_name}' must not contain separators"
        )));
    }
    normalize_rel_path(&format!("{ASSETS_DIR}/{}/{file_name}", category.as_str()))
}

#[cfg(test)]
#[path = "../../tests/unit/store/paths.rs"]
mod tests;
