/// Cover file extensions in the order candidates are considered.
pub const COVER_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Covers must be strictly smaller than this on both edges; Playnite keeps large
/// backgrounds next to the posters.
pub const MAX_COVER_EDGE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Portrait and under the size cap. Square icons and landscape art are rejected.
    pub fn qualifies_as_cover(self) -> bool {
        self.height > self.width && self.width < MAX_COVER_EDGE && self.height < MAX_COVER_EDGE
    }
}
