use image::RgbaImage;

use crate::{fit::resample::unpremultiply_rgba8_in_place, foundation::core::Size};

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over blend of two premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        out[i] = add_sat_u8(src[i], mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Premultiply one straight-alpha pixel.
pub fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(px[3]);
    [
        mul_div255(u16::from(px[0]), a),
        mul_div255(u16::from(px[1]), a),
        mul_div255(u16::from(px[2]), a),
        px[3],
    ]
}

/// Premultiplied RGBA8 canvas that layers are blended onto in painter's order.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Fully transparent surface of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0u8; (size.width as usize) * (size.height as usize) * 4],
        }
    }

    /// Surface dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Blend a straight-alpha bitmap with its top-left corner at `(x, y)`.
    ///
    /// Parts outside the surface are clipped; fully transparent source pixels leave the
    /// surface untouched.
    pub fn draw(&mut self, image: &RgbaImage, x: i64, y: i64) {
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(image.width())).min(w);
        let y1 = (y + i64::from(image.height())).min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for dy in y0..y1 {
            for dx in x0..x1 {
                let src = image.get_pixel((dx - x) as u32, (dy - y) as u32).0;
                if src[3] == 0 {
                    continue;
                }
                let idx = ((dy as usize) * (self.width as usize) + (dx as usize)) * 4;
                let dst = [
                    self.data[idx],
                    self.data[idx + 1],
                    self.data[idx + 2],
                    self.data[idx + 3],
                ];
                let out = over(dst, premultiply(src));
                self.data[idx..idx + 4].copy_from_slice(&out);
            }
        }
    }

    /// Convert back to a straight-alpha image.
    pub fn into_image(self) -> RgbaImage {
        let mut data = self.data;
        unpremultiply_rgba8_in_place(&mut data);
        // Length always matches width*height*4.
        RgbaImage::from_raw(self.width, self.height, data)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
