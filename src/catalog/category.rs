use crate::{fit::image_fit::FitPolicy, foundation::error::ReelError};

/// Fixed classification of generated art; decides fit policy and storage folder.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum AssetCategory {
    /// Whole-screen concept images.
    Mockups,
    /// Full-bleed scene behind the reels.
    Background,
    /// Panel drawn inside the reel window, under the symbols.
    ReelBackground,
    /// Ornamental overlay drawn on top of the reel window.
    Frame,
    /// Reel symbol icons.
    Symbols,
    /// Bonus game screens.
    BonusGames,
    /// Free-spins screens.
    FreeSpins,
    /// Splash screens.
    Splashes,
    /// Character art.
    Characters,
    /// UI panels.
    #[serde(rename = "UI")]
    Ui,
    /// User-supplied bitmaps, stored as-is.
    UploadedAssets,
}

impl AssetCategory {
    /// Every category, in canonical order.
    pub const ALL: [AssetCategory; 11] = [
        AssetCategory::Mockups,
        AssetCategory::Background,
        AssetCategory::ReelBackground,
        AssetCategory::Frame,
        AssetCategory::Symbols,
        AssetCategory::BonusGames,
        AssetCategory::FreeSpins,
        AssetCategory::Splashes,
        AssetCategory::Characters,
        AssetCategory::Ui,
        AssetCategory::UploadedAssets,
    ];

    /// Persisted name, also used as the asset subfolder name.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetCategory::Mockups => "Mockups",
            AssetCategory::Background => "Background",
            AssetCategory::ReelBackground => "ReelBackground",
            AssetCategory::Frame => "Frame",
            AssetCategory::Symbols => "Symbols",
            AssetCategory::BonusGames => "BonusGames",
            AssetCategory::FreeSpins => "FreeSpins",
            AssetCategory::Splashes => "Splashes",
            AssetCategory::Characters => "Characters",
            AssetCategory::Ui => "UI",
            AssetCategory::UploadedAssets => "UploadedAssets",
        }
    }

    /// Normalization applied to new bitmaps of this category.
    pub fn fit_policy(self) -> FitPolicy {
        match self {
            AssetCategory::Background | AssetCategory::Mockups => FitPolicy::Cover,
            AssetCategory::ReelBackground
            | AssetCategory::Frame
            | AssetCategory::Ui
            | AssetCategory::Splashes
            | AssetCategory::BonusGames
            | AssetCategory::FreeSpins
            | AssetCategory::Characters => FitPolicy::Contain,
            AssetCategory::Symbols => FitPolicy::Symbol,
            AssetCategory::UploadedAssets => FitPolicy::PassThrough,
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssetCategory {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ReelError::validation(format!("unknown asset category '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/category.rs"]
mod tests;
