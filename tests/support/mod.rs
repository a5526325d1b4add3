#![allow(dead_code)]

use std::borrow::Cow;

use gifscrub::{Disposal, Frame, PatchDims};

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

pub fn rect(width: u32, height: u32, left: u32, top: u32) -> PatchDims {
    PatchDims {
        width,
        height,
        left,
        top,
    }
}

pub fn solid(dims: PatchDims, px: [u8; 4], disposal: Disposal) -> Frame {
    Frame::new(
        dims,
        px.repeat((dims.width * dims.height) as usize),
        disposal,
        40,
    )
}

/// Palette used by [`encode_gif`]: index 0 black, 1 red, 2 green, 3 blue.
const PALETTE: [u8; 12] = [0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255];

/// Encode solid-index frames as `(rect, palette index, dispose, delay in centiseconds)`.
pub fn encode_gif(
    width: u16,
    height: u16,
    frames: &[((u16, u16, u16, u16), u8, gif::DisposalMethod, u16)],
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut enc = gif::Encoder::new(&mut out, width, height, &PALETTE).unwrap();
        for &((left, top, w, h), index, dispose, delay) in frames {
            let frame = gif::Frame {
                left,
                top,
                width: w,
                height: h,
                delay,
                dispose,
                buffer: Cow::Owned(vec![index; usize::from(w) * usize::from(h)]),
                ..gif::Frame::default()
            };
            enc.write_frame(&frame).unwrap();
        }
    }
    out
}
