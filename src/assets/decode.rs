use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{Disposal, Frame, PatchDims},
    error::{ScrubError, ScrubResult},
};

/// Decode a GIF bitstream into per-frame RGBA patches, in display order.
///
/// Patches are left exactly as stored in the file: sub-rectangles with their offsets and
/// disposal codes. Delays are converted from centiseconds to milliseconds.
#[tracing::instrument(skip(bytes), fields(bytes = bytes.len()))]
pub fn decode_gif(bytes: &[u8]) -> ScrubResult<Vec<Frame>> {
    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = opts
        .read_info(bytes)
        .map_err(|e| ScrubError::decode(format!("read gif header: {e}")))?;

    let mut frames = Vec::new();
    while let Some(f) = decoder
        .read_next_frame()
        .map_err(|e| ScrubError::decode(format!("frame {}: {e}", frames.len())))?
    {
        let dims = PatchDims {
            width: u32::from(f.width),
            height: u32::from(f.height),
            left: u32::from(f.left),
            top: u32::from(f.top),
        };
        frames.push(Frame::new(
            dims,
            f.buffer.to_vec(),
            disposal_from_gif(f.dispose),
            u32::from(f.delay) * 10,
        ));
    }

    tracing::debug!(
        frames = frames.len(),
        screen_width = decoder.width(),
        screen_height = decoder.height(),
        "decoded gif"
    );
    Ok(frames)
}

/// Read and decode a GIF file.
pub fn load_gif(path: &Path) -> ScrubResult<Vec<Frame>> {
    let bytes = std::fs::read(path).with_context(|| format!("read gif '{}'", path.display()))?;
    decode_gif(&bytes)
}

fn disposal_from_gif(dispose: gif::DisposalMethod) -> Disposal {
    match dispose {
        gif::DisposalMethod::Any => Disposal::Unspecified,
        gif::DisposalMethod::Keep => Disposal::Keep,
        gif::DisposalMethod::Background => Disposal::Background,
        gif::DisposalMethod::Previous => Disposal::Previous,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
