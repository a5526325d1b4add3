//! gifscrub turns delta-encoded animation frames into a seekable frame cache, and folds
//! per-frame display widths into timeline segments for a scrubber.
//!
//! # Pieces
//!
//! 1. **Decode** (optional): GIF bytes -> `Vec<Frame>` via [`decode_gif`]
//! 2. **Composite**: `&[Frame] -> FrameCompositor`, one full-canvas [`PixelBuffer`] per frame
//! 3. **Squash**: `DisplayUnit` stream -> sparse `Segment` stream via [`SegmentSquasher`]
//!
//! Compositing and squashing are independent; callers combine them (see the `gifscrub` binary).
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Straight-alpha RGBA8** end-to-end: patches and cached frames are not premultiplied.
//! - **All-or-nothing construction**: a failed [`FrameCompositor::new`] leaves nothing behind.
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod render;
mod timeline;

pub use assets::decode::{decode_gif, load_gif};
pub use foundation::core::{Canvas, Disposal, Frame, PatchDims};
pub use foundation::error::{ScrubError, ScrubResult};
pub use render::buffer::PixelBuffer;
pub use render::composite::{Rgba8, blit_over, clear_rect, over};
pub use render::compositor::FrameCompositor;
pub use timeline::opts::TimelineOpts;
pub use timeline::segments::{DisplayUnit, Segment, SegmentSquasher, Squash, squash_segments};
pub use timeline::units::display_units;
