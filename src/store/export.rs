use std::io::{Cursor, Write};

use anyhow::Context;

use crate::{
    foundation::error::{ReelError, ReelResult},
    store::project_store::ProjectStore,
};

/// Bundle every file under a project directory (document and bitmaps) into a deflate ZIP.
///
/// Entry names are relative to the project directory and always use `/`.
#[tracing::instrument(skip(store))]
pub fn export_project_zip(store: &ProjectStore, project_id: &str) -> ReelResult<Vec<u8>> {
    let dir = store.project_dir(project_id)?;
    if !dir.is_dir() {
        return Err(ReelError::not_found(project_id));
    }

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    let mut files = 0usize;
    for entry in walkdir::WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry.context("walk project dir")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(&dir)
            .context("entry outside project dir")?;
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let bytes = std::fs::read(entry.path())
            .with_context(|| format!("read '{}'", entry.path().display()))?;
        zip.start_file(name.as_str(), options)
            .with_context(|| format!("start zip entry '{name}'"))?;
        zip.write_all(&bytes)
            .with_context(|| format!("write zip entry '{name}'"))?;
        files += 1;
    }

    let cursor = zip.finish().context("finish zip")?;
    tracing::debug!(files, "exported project archive");
    Ok(cursor.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/store/export.rs"]
mod tests;
