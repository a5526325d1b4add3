use crate::timeline::segments::DisplayUnit;

/// Map per-frame delays to timeline units laid end to end.
///
/// Each unit is `delay_ms * px_per_ms` wide and starts at the sum of all earlier delays.
pub fn display_units<I>(delays_ms: I, px_per_ms: f64) -> impl Iterator<Item = DisplayUnit>
where
    I: IntoIterator<Item = u32>,
{
    delays_ms.into_iter().scan(0u64, move |elapsed, delay| {
        let pts = *elapsed;
        *elapsed = elapsed.saturating_add(u64::from(delay));
        Some(DisplayUnit::new(f64::from(delay) * px_per_ms, pts))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/units.rs"]
mod tests;
