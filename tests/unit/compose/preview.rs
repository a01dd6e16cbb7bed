use image::Rgba;

use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(px))
}

fn cell_color(r: u32, c: u32) -> [u8; 4] {
    [(c * 40 + 10) as u8, (r * 60 + 20) as u8, 200, 255]
}

#[test]
fn landscape_grid_cells_are_128_by_140_at_expected_offsets() {
    let bg = solid(1792, 1024, [0, 0, 0, 255]);
    let symbols: Vec<Vec<RgbaImage>> = (0..3)
        .map(|r| (0..5).map(|c| solid(158, 178, cell_color(r, c))).collect())
        .collect();
    let grid = SymbolGrid::new(symbols.iter().map(|row| row.iter().collect()).collect());

    let rw = Rect::new(400, 170, 640, 420);
    let inputs = PreviewInputs {
        background: Some(&bg),
        symbols: grid,
        ..PreviewInputs::new(Size::new(1440, 810), rw)
    };
    let out = render_preview(&inputs);
    assert_eq!(out.dimensions(), (1440, 810));

    for r in 0..3u32 {
        for c in 0..5u32 {
            let x0 = 400 + c * 128;
            let y0 = 170 + r * 140;
            let want = cell_color(r, c);
            assert_eq!(out.get_pixel(x0, y0).0, want, "cell {r},{c} top-left");
            assert_eq!(out.get_pixel(x0 + 127, y0 + 139).0, want, "cell {r},{c} bottom-right");
        }
    }
    assert_eq!(out.get_pixel(399, 170).0, [0, 0, 0, 255]);
    assert_eq!(out.get_pixel(1040, 170).0, [0, 0, 0, 255]);
    assert_eq!(out.get_pixel(400, 590).0, [0, 0, 0, 255]);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
}

#[test]
fn layers_stack_in_fixed_order() {
    let canvas = Size::new(40, 20);
    let rw = Rect::new(10, 5, 20, 10);
    let bg = solid(4, 2, [255, 0, 0, 255]);
    let reel_bg = solid(2, 2, [0, 255, 0, 255]);
    let sym = [solid(8, 8, [0, 0, 255, 255])];

    // Frame: opaque border with a transparent hole in the middle.
    let mut frame = solid(20, 10, [255, 255, 0, 255]);
    for y in 2..8 {
        for x in 2..18 {
            frame.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        }
    }

    let inputs = PreviewInputs {
        background: Some(&bg),
        reel_background: Some(&reel_bg),
        symbols: SymbolGrid::cycle(&sym, 1, 1),
        frame: Some(&frame),
        ..PreviewInputs::new(canvas, rw)
    };
    let out = render_preview(&inputs);

    assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(20, 10).0, [0, 0, 255, 255]);
    assert_eq!(out.get_pixel(10, 5).0, [255, 255, 0, 255]);
}

#[test]
fn reel_background_shows_when_no_symbols() {
    let rw = Rect::new(2, 2, 4, 4);
    let reel_bg = solid(1, 1, [0, 255, 0, 255]);
    let inputs = PreviewInputs {
        reel_background: Some(&reel_bg),
        ..PreviewInputs::new(Size::new(8, 8), rw)
    };
    let out = render_preview(&inputs);
    assert_eq!(out.get_pixel(3, 3).0, [0, 255, 0, 255]);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(6, 6).0, [0, 0, 0, 0]);
}

#[test]
fn empty_grid_and_empty_first_row_draw_nothing() {
    let rw = Rect::new(0, 0, 8, 8);
    let out = render_preview(&PreviewInputs {
        symbols: SymbolGrid::new(vec![vec![], vec![]]),
        ..PreviewInputs::new(Size::new(8, 8), rw)
    });
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));

    let none: [RgbaImage; 0] = [];
    let grid = SymbolGrid::cycle(&none, 3, 5);
    assert!(grid.is_empty());
}

#[test]
fn cycle_repeats_symbols_row_major() {
    let syms = [
        solid(1, 1, [1, 0, 0, 255]),
        solid(1, 1, [2, 0, 0, 255]),
        solid(1, 1, [3, 0, 0, 255]),
        solid(1, 1, [4, 0, 0, 255]),
    ];
    let grid = SymbolGrid::cycle(&syms, 3, 5);
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.reels(), 5);
    assert_eq!(grid.get(0, 0).unwrap().get_pixel(0, 0).0[0], 1);
    assert_eq!(grid.get(0, 4).unwrap().get_pixel(0, 0).0[0], 1);
    assert_eq!(grid.get(1, 0).unwrap().get_pixel(0, 0).0[0], 2);
    assert_eq!(grid.get(2, 4).unwrap().get_pixel(0, 0).0[0], 3);
}

#[test]
fn off_canvas_geometry_is_clipped() {
    let frame = solid(10, 10, [5, 5, 5, 255]);
    let sym = [solid(3, 3, [6, 6, 6, 255])];
    let rw = Rect::new(-50, 30, 500, 500);
    let out = render_preview(&PreviewInputs {
        frame: Some(&frame),
        symbols: SymbolGrid::cycle(&sym, 3, 3),
        ..PreviewInputs::new(Size::new(16, 16), rw)
    });
    assert_eq!(out.dimensions(), (16, 16));
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn cells_narrower_than_a_pixel_are_skipped() {
    let sym = [solid(3, 3, [6, 6, 6, 255])];
    let out = render_preview(&PreviewInputs {
        symbols: SymbolGrid::cycle(&sym, 3, 5),
        ..PreviewInputs::new(Size::new(8, 8), Rect::new(0, 0, 4, 8))
    });
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}
