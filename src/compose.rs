//! Premultiplied blending and the layered preview renderer.

pub(crate) mod blend;
pub(crate) mod preview;
pub(crate) mod project_preview;
