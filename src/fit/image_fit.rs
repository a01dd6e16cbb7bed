use image::{DynamicImage, RgbaImage, imageops};

use crate::{catalog::category::AssetCategory, fit::resample::resample, foundation::core::Size};

/// Fixed storage size for every symbol bitmap, independent of the live canvas.
pub const SYMBOL_SIZE: Size = Size::new(158, 178);

/// How a category's bitmaps are normalized before they are stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitPolicy {
    /// Scale to fill the canvas and center-crop the overflow.
    Cover,
    /// Scale to fit inside the canvas and pad with transparency.
    Contain,
    /// Contain-fit into [`SYMBOL_SIZE`].
    Symbol,
    /// Store unchanged (converted to RGBA8).
    PassThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Cover,
    Contain,
}

/// Scale uniformly so the image covers `target_w x target_h`, then center-crop the overflow.
///
/// The result is always exactly the target size with no transparent border for an opaque
/// source. A zero-sized source yields a fully transparent canvas.
pub fn fit_cover(image: &DynamicImage, target_w: u32, target_h: u32) -> RgbaImage {
    fit_rgba(&image.to_rgba8(), target_w, target_h, Mode::Cover)
}

/// Scale uniformly so the whole image fits inside `target_w x target_h`, centered, padding the
/// remainder with fully transparent pixels.
pub fn fit_contain(image: &DynamicImage, target_w: u32, target_h: u32) -> RgbaImage {
    fit_rgba(&image.to_rgba8(), target_w, target_h, Mode::Contain)
}

/// Contain-fit into a fixed small canvas, as used for symbol cells.
pub fn fit_exact(image: &DynamicImage, w: u32, h: u32) -> RgbaImage {
    fit_contain(image, w, h)
}

/// [`fit_exact`] at [`SYMBOL_SIZE`].
pub fn fit_symbol(image: &DynamicImage) -> RgbaImage {
    fit_exact(image, SYMBOL_SIZE.width, SYMBOL_SIZE.height)
}

/// Normalize a freshly generated or uploaded bitmap for storage under `category`.
///
/// Full-bleed categories are cover-fit and overlay categories contain-fit to `canvas`;
/// symbols always land in [`SYMBOL_SIZE`]; uploaded assets pass through.
pub fn fit_for_category(image: &DynamicImage, category: AssetCategory, canvas: Size) -> RgbaImage {
    match category.fit_policy() {
        FitPolicy::Cover => fit_cover(image, canvas.width, canvas.height),
        FitPolicy::Contain => fit_contain(image, canvas.width, canvas.height),
        FitPolicy::Symbol => fit_symbol(image),
        FitPolicy::PassThrough => image.to_rgba8(),
    }
}

fn fit_rgba(src: &RgbaImage, target_w: u32, target_h: u32, mode: Mode) -> RgbaImage {
    let (iw, ih) = src.dimensions();
    if iw == 0 || ih == 0 || target_w == 0 || target_h == 0 {
        return RgbaImage::new(target_w, target_h);
    }

    let sx = f64::from(target_w) / f64::from(iw);
    let sy = f64::from(target_h) / f64::from(ih);
    let scale = match mode {
        Mode::Cover => sx.max(sy),
        Mode::Contain => sx.min(sy),
    };

    match mode {
        Mode::Cover => {
            // Crop in source space; the resize output is never larger than the target.
            let cw = crop_dim(target_w, scale, iw);
            let ch = crop_dim(target_h, scale, ih);
            let cx = (iw - cw).div_ceil(2);
            let cy = (ih - ch).div_ceil(2);
            tracing::debug!(iw, ih, cw, ch, target_w, target_h, ?mode, "fit image");
            let window = imageops::crop_imm(src, cx, cy, cw, ch).to_image();
            resample(&window, target_w, target_h)
        }
        Mode::Contain => {
            // Floating point can land a hair past the target edge.
            let nw = scaled_dim(iw, scale).min(target_w);
            let nh = scaled_dim(ih, scale).min(target_h);
            tracing::debug!(iw, ih, nw, nh, target_w, target_h, ?mode, "fit image");
            let resized = resample(src, nw, nh);
            let mut out = RgbaImage::new(target_w, target_h);
            let x = (target_w - nw) / 2;
            let y = (target_h - nh) / 2;
            imageops::replace(&mut out, &resized, i64::from(x), i64::from(y));
            out
        }
    }
}

/// Cover-fit an already-decoded RGBA bitmap.
pub(crate) fn cover_rgba(src: &RgbaImage, target_w: u32, target_h: u32) -> RgbaImage {
    fit_rgba(src, target_w, target_h, Mode::Cover)
}

/// Source pixels that map onto `target` output pixels, within `1..=src`.
fn crop_dim(target: u32, scale: f64, src: u32) -> u32 {
    let v = (f64::from(target) / scale).ceil();
    if v < 1.0 { 1 } else { v.min(f64::from(src)) as u32 }
}

fn scaled_dim(src: u32, scale: f64) -> u32 {
    let v = (f64::from(src) * scale).floor();
    if v < 1.0 { 1 } else { v.min(f64::from(u32::MAX)) as u32 }
}

#[cfg(test)]
#[path = "../../tests/unit/fit/image_fit.rs"]
mod tests;
