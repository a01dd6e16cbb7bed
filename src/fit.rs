//! Bitmap normalization: cover, contain and fixed symbol cells.

pub(crate) mod image_fit;
pub(crate) mod resample;
