/// Pixel dimensions of a canvas or bitmap.
///
/// Persisted as `{"w": .., "h": ..}`; `width`/`height` keys are accepted on read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    #[serde(rename = "w", alias = "width")]
    pub width: u32,
    /// Height in pixels.
    #[serde(rename = "h", alias = "height")]
    pub height: u32,
}

impl Size {
    /// Construct a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rectangle covering the whole size, anchored at the origin.
    pub fn to_rect(self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle in canvas pixels.
///
/// The origin may be negative or past the canvas edge; rendering clips instead of failing.
/// Layout validation is where out-of-canvas rectangles are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    #[serde(rename = "w", alias = "width")]
    pub width: u32,
    /// Height in pixels.
    #[serde(rename = "h", alias = "height")]
    pub height: u32,
}

impl Rect {
    /// Construct a rectangle from origin and extent.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Extent of the rectangle.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    pub fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// True when the rectangle lies entirely inside `[0, canvas.w) x [0, canvas.h)`.
    pub fn fits_within(self, canvas: Size) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= i64::from(canvas.width)
            && self.bottom() <= i64::from(canvas.height)
    }
}

/// Current wall-clock time as fractional seconds since the Unix epoch.
pub fn now_epoch_secs() -> f64 {
    let now = chrono::Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
