use crate::foundation::error::{ScrubError, ScrubResult};

/// Width and height of the shared canvas, fixed for the whole animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Patch rectangle and its offset within the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PatchDims {
    pub width: u32,
    pub height: u32,
    pub left: u32,
    pub top: u32,
}

impl PatchDims {
    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    /// Whether canvas pixel `(x, y)` falls inside this rectangle.
    pub fn contains(self, x: u32, y: u32) -> bool {
        let x = u64::from(x);
        let y = u64::from(y);
        let left = u64::from(self.left);
        let top = u64::from(self.top);
        x >= left && x < left + u64::from(self.width) && y >= top && y < top + u64::from(self.height)
    }
}

/// How the canvas is treated around a frame. Mirrors the GIF graphic control codes.
///
/// Only [`Disposal::Background`] changes compositing; the others are carried for callers.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Disposal {
    #[default]
    Unspecified,
    Keep,
    Background,
    Previous,
}

impl Disposal {
    /// Map a raw GIF disposal code (0..=3). Reserved codes fall back to `Unspecified`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Keep,
            2 => Self::Background,
            3 => Self::Previous,
            _ => Self::Unspecified,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Unspecified => 0,
            Self::Keep => 1,
            Self::Background => 2,
            Self::Previous => 3,
        }
    }
}

/// One decoded animation frame: a straight-alpha RGBA patch plus its placement.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub dims: PatchDims,
    /// Row-major RGBA8, `dims.width * dims.height * 4` bytes.
    pub patch: Vec<u8>,
    pub disposal: Disposal,
    pub delay_ms: u32,
}

impl Frame {
    pub fn new(dims: PatchDims, patch: Vec<u8>, disposal: Disposal, delay_ms: u32) -> Self {
        Self {
            dims,
            patch,
            disposal,
            delay_ms,
        }
    }

    pub fn validate(&self) -> ScrubResult<()> {
        if self.patch.len() != self.dims.byte_len() {
            return Err(ScrubError::validation(format!(
                "patch is {} bytes, expected {} for a {}x{} rgba8 rectangle",
                self.patch.len(),
                self.dims.byte_len(),
                self.dims.width,
                self.dims.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
