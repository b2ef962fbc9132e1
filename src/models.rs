use std::fmt;

use image::imageops::FilterType;

/// Side lengths of the generated icons, in the order they are written.
pub const ICON_SIZES: [TargetSize; 3] = [TargetSize(16), TargetSize(48), TargetSize(128)];

/// Nearest keeps hard pixel edges; any smoothing filter blurs pixel art.
pub const ICON_FILTER: FilterType = FilterType::Nearest;

/// Square side length of one output icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetSize(pub u32);

impl TargetSize {
    pub fn px(self) -> u32 {
        self.0
    }

    /// `icon-<size>.png`
    pub fn file_name(self) -> String {
        format!("icon-{}.png", self.0)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
