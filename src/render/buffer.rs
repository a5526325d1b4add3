use crate::foundation::{
    core::Canvas,
    error::{ScrubError, ScrubResult},
};

/// Row-major straight-alpha RGBA8 pixel storage.
///
/// All allocations go through `try_reserve_exact`, so running out of memory surfaces as
/// [`ScrubError::Allocation`] instead of aborting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-initialized (fully transparent) buffer.
    pub fn new(width: u32, height: u32) -> ScrubResult<Self> {
        let bytes = rgba8_len(width, height);
        let mut data = alloc_bytes(bytes)?;
        data.resize(bytes, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ScrubResult<Self> {
        let expected = rgba8_len(width, height);
        if data.len() != expected {
            return Err(ScrubError::validation(format!(
                "rgba8 buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Byte-for-byte overwrite of the whole buffer.
    pub fn copy_from_slice(&mut self, src: &[u8]) -> ScrubResult<()> {
        if src.len() != self.data.len() {
            return Err(ScrubError::validation(format!(
                "cannot copy {} bytes into a {}x{} rgba8 buffer",
                src.len(),
                self.width,
                self.height
            )));
        }
        self.data.copy_from_slice(src);
        Ok(())
    }

    /// Independent deep copy with fallible allocation.
    pub fn try_clone(&self) -> ScrubResult<Self> {
        let mut data = alloc_bytes(self.data.len())?;
        data.extend_from_slice(&self.data);
        Ok(Self {
            width: self.width,
            height: self.height,
            data,
        })
    }
}

fn rgba8_len(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4)
}

fn alloc_bytes(bytes: usize) -> ScrubResult<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(bytes)
        .map_err(|_| ScrubError::Allocation { bytes })?;
    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffer.rs"]
mod tests;
