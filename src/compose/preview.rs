use image::RgbaImage;

use crate::{
    compose::blend::Surface,
    fit::{image_fit::cover_rgba, resample::resample},
    foundation::core::{Rect, Size},
};

/// Rows x reels matrix of symbol bitmaps, outer index is the row.
#[derive(Clone, Debug, Default)]
pub struct SymbolGrid<'a> {
    cells: Vec<Vec<&'a RgbaImage>>,
}

impl<'a> SymbolGrid<'a> {
    /// Grid from explicit rows. The reel count is taken from the first row.
    pub fn new(cells: Vec<Vec<&'a RgbaImage>>) -> Self {
        Self { cells }
    }

    /// Fill `rows x reels` cells by repeating `symbols` in row-major order.
    ///
    /// Empty when there are no symbols.
    pub fn cycle(symbols: &'a [RgbaImage], rows: u32, reels: u32) -> Self {
        if symbols.is_empty() {
            return Self::default();
        }
        let mut cells = Vec::with_capacity(rows as usize);
        let mut k = 0usize;
        for _ in 0..rows {
            let mut row = Vec::with_capacity(reels as usize);
            for _ in 0..reels {
                row.push(&symbols[k % symbols.len()]);
                k += 1;
            }
            cells.push(row);
        }
        Self { cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of reels (length of the first row).
    pub fn reels(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// True when nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.reels() == 0
    }

    /// Bitmap at `(row, reel)`, if present.
    pub fn get(&self, row: usize, reel: usize) -> Option<&'a RgbaImage> {
        self.cells.get(row).and_then(|r| r.get(reel)).copied()
    }
}

/// Everything needed to flatten one preview image.
#[derive(Clone, Debug)]
pub struct PreviewInputs<'a> {
    /// Output size.
    pub canvas: Size,
    /// Where the background is cover-fit; usually the whole canvas.
    pub background_rect: Rect,
    /// Where the reel background and symbol grid are drawn.
    pub reel_window: Rect,
    /// Where the frame overlay is drawn; usually the reel window.
    pub frame_rect: Rect,
    /// Lowest layer.
    pub background: Option<&'a RgbaImage>,
    /// Panel behind the symbols.
    pub reel_background: Option<&'a RgbaImage>,
    /// Symbol cells.
    pub symbols: SymbolGrid<'a>,
    /// Topmost layer.
    pub frame: Option<&'a RgbaImage>,
}

impl<'a> PreviewInputs<'a> {
    /// Inputs with no layers, the background spanning the canvas and the frame on the reel window.
    pub fn new(canvas: Size, reel_window: Rect) -> Self {
        Self {
            canvas,
            background_rect: canvas.to_rect(),
            reel_window,
            frame_rect: reel_window,
            background: None,
            reel_background: None,
            symbols: SymbolGrid::default(),
            frame: None,
        }
    }
}

/// Flatten the layers in fixed order: background, reel background, symbol grid, frame.
///
/// Cells are `reel_window.w / reels` by `reel_window.h / rows` (integer division) and are
/// placed at `(x + c * cell_w, y + r * cell_h)`. Off-canvas geometry is clipped.
#[tracing::instrument(skip(inputs), fields(canvas = %inputs.canvas))]
pub fn render_preview(inputs: &PreviewInputs<'_>) -> RgbaImage {
    let mut surface = Surface::new(inputs.canvas);

    if let Some(bg) = inputs.background {
        let r = inputs.background_rect;
        if !r.is_empty() {
            surface.draw(&cover_rgba(bg, r.width, r.height), i64::from(r.x), i64::from(r.y));
        }
    }

    let rw = inputs.reel_window;
    if let Some(reel_bg) = inputs.reel_background {
        draw_stretched(&mut surface, reel_bg, rw);
    }

    let grid = &inputs.symbols;
    if !grid.is_empty() {
        let rows = grid.rows() as u32;
        let reels = grid.reels() as u32;
        let cell_w = rw.width / reels;
        let cell_h = rw.height / rows;
        tracing::debug!(rows, reels, cell_w, cell_h, "draw symbol grid");

        if cell_w > 0 && cell_h > 0 {
            for r in 0..rows {
                for c in 0..reels {
                    let Some(sym) = grid.get(r as usize, c as usize) else {
                        continue;
                    };
                    let x = i64::from(rw.x) + i64::from(c * cell_w);
                    let y = i64::from(rw.y) + i64::from(r * cell_h);
                    surface.draw(&resample(sym, cell_w, cell_h), x, y);
                }
            }
        }
    }

    if let Some(frame) = inputs.frame {
        draw_stretched(&mut surface, frame, inputs.frame_rect);
    }

    surface.into_image()
}

fn draw_stretched(surface: &mut Surface, image: &RgbaImage, rect: Rect) {
    if rect.is_empty() {
        return;
    }
    surface.draw(
        &resample(image, rect.width, rect.height),
        i64::from(rect.x),
        i64::from(rect.y),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/compose/preview.rs"]
mod tests;
