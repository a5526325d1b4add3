use crate::foundation::error::{ScrubError, ScrubResult};

/// One frame's slot on the timeline: its display width and start timestamp.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayUnit {
    pub width: f64,
    /// Start timestamp in milliseconds.
    pub pts: u64,
}

impl DisplayUnit {
    pub fn new(width: f64, pts: u64) -> Self {
        Self { width, pts }
    }
}

/// An aggregated timeline tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub width: f64,
    /// Timestamp of the first unit in the run.
    pub pts: u64,
    /// More than one unit contributed.
    pub squashed: bool,
}

/// Merges consecutive display units until their combined width reaches `threshold`.
///
/// A run that never reaches the threshold is dropped, including at end of input; there is
/// no flush. One squasher serves exactly one stream and cannot be rewound.
#[derive(Clone, Debug)]
pub struct SegmentSquasher {
    threshold: f64,
    running_width: f64,
    running_pts: u64,
}

impl SegmentSquasher {
    pub fn new(threshold: f64) -> ScrubResult<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ScrubError::validation(format!(
                "segment threshold must be a positive finite number, got {threshold}"
            )));
        }
        Ok(Self {
            threshold,
            running_width: 0.0,
            running_pts: 0,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Width accumulated by the current, not yet emitted run.
    pub fn pending_width(&self) -> f64 {
        self.running_width
    }

    /// Feed one unit; returns a segment when the run reaches the threshold.
    pub fn step(&mut self, unit: DisplayUnit) -> Option<Segment> {
        if self.running_width == 0.0 {
            self.running_pts = unit.pts;
        }
        self.running_width += unit.width;

        if self.running_width < self.threshold {
            return None;
        }

        let width = std::mem::take(&mut self.running_width);
        Some(Segment {
            width,
            pts: self.running_pts,
            squashed: width != unit.width,
        })
    }

    /// Lazily squash `units`, yielding only emitted segments.
    pub fn squash<I>(self, units: I) -> Squash<I::IntoIter>
    where
        I: IntoIterator<Item = DisplayUnit>,
    {
        Squash {
            squasher: self,
            units: units.into_iter(),
        }
    }
}

/// Iterator returned by [`SegmentSquasher::squash`].
#[derive(Clone, Debug)]
pub struct Squash<I> {
    squasher: SegmentSquasher,
    units: I,
}

impl<I: Iterator<Item = DisplayUnit>> Iterator for Squash<I> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        for unit in self.units.by_ref() {
            if let Some(segment) = self.squasher.step(unit) {
                return Some(segment);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.units.size_hint().1)
    }
}

/// Squash a whole slice with a fresh squasher.
pub fn squash_segments(units: &[DisplayUnit], threshold: f64) -> ScrubResult<Vec<Segment>> {
    Ok(SegmentSquasher::new(threshold)?
        .squash(units.iter().copied())
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segments.rs"]
mod tests;
