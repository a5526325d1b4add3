use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ScrubError, ScrubResult};

/// Timeline scale and squashing knobs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineOpts {
    /// Minimum segment width, in the same units as display widths (pixels).
    pub threshold: f64,
    /// Display pixels per millisecond of frame delay.
    pub px_per_ms: f64,
}

impl Default for TimelineOpts {
    fn default() -> Self {
        Self {
            threshold: 24.0,
            px_per_ms: 0.1,
        }
    }
}

impl TimelineOpts {
    pub fn from_json(json: &str) -> ScrubResult<Self> {
        let opts: Self = serde_json::from_str(json).context("parse timeline options")?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_path(path: &Path) -> ScrubResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read timeline options '{}'", path.display()))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> ScrubResult<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ScrubError::validation("threshold must be > 0"));
        }
        if !self.px_per_ms.is_finite() || self.px_per_ms <= 0.0 {
            return Err(ScrubError::validation("px_per_ms must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/opts.rs"]
mod tests;
