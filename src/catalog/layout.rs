use crate::foundation::{
    core::{Rect, Size},
    error::{ReelError, ReelResult},
};

/// Screen orientation of a slot project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// Wide screen (1440x810 by default).
    #[default]
    Landscape,
    /// Tall screen (810x1440 by default).
    Portrait,
}

impl Orientation {
    /// Persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Orientation {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" => Ok(Orientation::Landscape),
            "portrait" => Ok(Orientation::Portrait),
            _ => Err(ReelError::validation(format!("unknown orientation '{s}'"))),
        }
    }
}

/// Read an optional orientation, treating `null` and blank strings as not recorded.
pub(crate) fn deserialize_optional_orientation<'de, D>(
    deserializer: D,
) -> Result<Option<Orientation>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Persisted preview configuration as found in `project.json`.
///
/// Every field is optional so that older documents (and the empty mapping) stay readable.
/// Unknown keys are kept verbatim and written back on save.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewConfig {
    /// Orientation recorded at creation; older documents keep it only here.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_orientation",
        skip_serializing_if = "Option::is_none"
    )]
    pub orientation: Option<Orientation>,
    /// Canvas size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<Size>,
    /// Background rectangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Rect>,
    /// Reel window rectangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reel_window: Option<Rect>,
    /// Frame overlay rectangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Rect>,
    /// Keys this version does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Fully resolved preview geometry; every rectangle is in absolute canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewLayout {
    /// Orientation the layout was resolved for.
    pub orientation: Orientation,
    /// Canvas size.
    pub canvas: Size,
    /// Where the background is cover-fit.
    pub background: Rect,
    /// Where reel background and symbols are drawn.
    pub reel_window: Rect,
    /// Where the frame overlay is drawn.
    pub frame: Rect,
}

/// Canonical starting layout for a new project of the given orientation.
pub fn default_preview_config(orientation: Orientation) -> PreviewConfig {
    let layout = default_layout(orientation);
    PreviewConfig {
        orientation: Some(orientation),
        canvas: Some(layout.canvas),
        background: Some(layout.background),
        reel_window: Some(layout.reel_window),
        frame: Some(layout.frame),
        extra: serde_json::Map::new(),
    }
}

fn default_layout(orientation: Orientation) -> PreviewLayout {
    let (canvas, reel_window) = match orientation {
        Orientation::Landscape => (Size::new(1440, 810), Rect::new(400, 170, 640, 420)),
        Orientation::Portrait => (Size::new(810, 1440), Rect::new(185, 360, 440, 720)),
    };
    PreviewLayout {
        orientation,
        canvas,
        background: canvas.to_rect(),
        reel_window,
        frame: reel_window,
    }
}

impl PreviewConfig {
    /// Fill every missing field from the canonical default for `orientation`.
    ///
    /// The background defaults to the full (possibly custom) canvas and the frame to the reel
    /// window. Documents written before orientations existed resolve to the landscape default.
    pub fn resolve(&self, orientation: Orientation) -> PreviewLayout {
        let defaults = default_layout(orientation);
        let canvas = self.canvas.unwrap_or(defaults.canvas);
        let reel_window = self.reel_window.unwrap_or(defaults.reel_window);
        PreviewLayout {
            orientation,
            canvas,
            background: self.background.unwrap_or_else(|| canvas.to_rect()),
            reel_window,
            frame: self.frame.unwrap_or(reel_window),
        }
    }
}

impl PreviewLayout {
    /// Reject empty canvases and rectangles that are empty or leave the canvas.
    pub fn validate(&self) -> ReelResult<()> {
        if self.canvas.is_empty() {
            return Err(ReelError::invalid_layout(format!(
                "canvas {} must be non-empty",
                self.canvas
            )));
        }
        for (name, rect) in [
            ("background", self.background),
            ("reel_window", self.reel_window),
            ("frame", self.frame),
        ] {
            if rect.is_empty() {
                return Err(ReelError::invalid_layout(format!(
                    "{name} rectangle must be non-empty"
                )));
            }
            if !rect.fits_within(self.canvas) {
                return Err(ReelError::invalid_layout(format!(
                    "{name} rectangle ({}, {}, {}x{}) exceeds canvas {}",
                    rect.x, rect.y, rect.width, rect.height, self.canvas
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/layout.rs"]
mod tests;
