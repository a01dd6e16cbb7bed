use image::{
    RgbaImage,
    imageops::{self, FilterType},
};

/// Resize `src` to exactly `width x height` with a Lanczos3 filter.
///
/// Filtering runs on premultiplied pixels so the color of fully transparent texels never bleeds
/// into visible edges. Resizing to the current size returns an exact copy; an empty source or
/// target yields a transparent image of the requested size.
pub fn resample(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    if width == 0 || height == 0 || src.width() == 0 || src.height() == 0 {
        return RgbaImage::new(width, height);
    }

    let mut premul = src.clone();
    premultiply_rgba8_in_place(&mut premul);
    let mut out = imageops::resize(&premul, width, height, FilterType::Lanczos3);
    unpremultiply_rgba8_in_place(&mut out);
    out
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        match a {
            0 => {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
            }
            255 => {}
            _ => {
                // Lanczos ringing can leave color above alpha; clamp instead of wrapping.
                for c in &mut px[..3] {
                    *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fit/resample.rs"]
mod tests;
