use crate::{
    foundation::{
        core::{Canvas, Disposal, Frame},
        error::{ScrubError, ScrubResult},
    },
    render::{
        buffer::PixelBuffer,
        composite::{blit_over, clear_rect},
    },
};

/// Random-access cache of fully composited frames.
///
/// Construction renders every input frame up front; afterwards the cache is immutable and
/// [`FrameCompositor::get`] is a plain lookup. The canvas size is taken from the first frame.
#[derive(Debug)]
pub struct FrameCompositor {
    canvas: Canvas,
    frames: Vec<PixelBuffer>,
    delays_ms: Vec<u32>,
}

impl FrameCompositor {
    /// Composite `frames` in order into a full-canvas cache.
    ///
    /// All-or-nothing: any error discards every frame rendered so far.
    #[tracing::instrument(skip(frames), fields(frames = frames.len()))]
    pub fn new(frames: &[Frame]) -> ScrubResult<Self> {
        let first = frames.first().ok_or(ScrubError::EmptyInput)?;
        let canvas = Canvas {
            width: first.dims.width,
            height: first.dims.height,
        };

        let mut cache = Vec::new();
        cache
            .try_reserve_exact(frames.len())
            .map_err(|_| ScrubError::Allocation {
                bytes: frames.len().saturating_mul(std::mem::size_of::<PixelBuffer>()),
            })?;

        let mut pass = CompositePass::new(canvas)?;
        for (idx, frame) in frames.iter().enumerate() {
            frame.validate().map_err(|err| match err {
                ScrubError::Validation(msg) => {
                    ScrubError::validation(format!("frame {idx}: {msg}"))
                }
                other => other,
            })?;
            cache.push(pass.render(frame)?);
        }

        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            bytes = canvas.byte_len().saturating_mul(cache.len()),
            "frame cache built"
        );

        Ok(Self {
            canvas,
            frames: cache,
            delays_ms: frames.iter().map(|f| f.delay_ms).collect(),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false` for a successfully built cache.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Cached full-canvas buffer for frame `index`.
    pub fn get(&self, index: usize) -> ScrubResult<&PixelBuffer> {
        self.frames.get(index).ok_or(ScrubError::IndexOutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    /// Display delay of frame `index`, passed through from the input.
    pub fn delay_ms(&self, index: usize) -> ScrubResult<u32> {
        self.delays_ms
            .get(index)
            .copied()
            .ok_or(ScrubError::IndexOutOfRange {
                index,
                len: self.delays_ms.len(),
            })
    }

    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &PixelBuffer> + '_ {
        self.frames.iter()
    }
}

/// Mutable state of one construction pass.
struct CompositePass {
    /// Scratch buffer sized to the last patch; `None` until the first frame.
    patch: Option<PixelBuffer>,
    surface: PixelBuffer,
}

impl CompositePass {
    fn new(canvas: Canvas) -> ScrubResult<Self> {
        Ok(Self {
            patch: None,
            surface: PixelBuffer::new(canvas.width, canvas.height)?,
        })
    }

    fn render(&mut self, frame: &Frame) -> ScrubResult<PixelBuffer> {
        let dims = frame.dims;
        let patch = match self.patch.take() {
            Some(p) if p.width() == dims.width && p.height() == dims.height => p,
            _ => {
                tracing::debug!(
                    width = dims.width,
                    height = dims.height,
                    "reallocating patch buffer"
                );
                PixelBuffer::new(dims.width, dims.height)?
            }
        };
        let patch = self.patch.insert(patch);
        patch.copy_from_slice(&frame.patch)?;

        // Whole surface, and before drawing this frame's own patch.
        if frame.disposal == Disposal::Background {
            tracing::debug!("restore-to-background: clearing surface");
            let (w, h) = (self.surface.width(), self.surface.height());
            clear_rect(&mut self.surface, 0, 0, w, h);
        }

        blit_over(&mut self.surface, patch, dims.left, dims.top);
        self.surface.try_clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
