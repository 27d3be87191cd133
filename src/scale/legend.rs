use crate::scale::color_scale::ColorScale;
use crate::scale::error::ScaleError;
use crate::types::color::Color;
use crate::types::domain::Domain;
use serde::Serialize;

pub const DEFAULT_LEGEND_STEP: f64 = 10.0;

/// Upper bound on the number of legend entries.
pub const MAX_LEGEND_ENTRIES: usize = 10_000;

/// One swatch of the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendEntry {
    pub value: f64,
    pub color: Color,
}

/// Builds the legend for `domain`, hottest entry first.
///
/// Values run in multiples of `step` from `floor(min / step) * step` up to the first
/// multiple of `step` that is not below `max`. A degenerate domain gets a single entry.
///
/// # Errors
///
/// Returns [`ScaleError::InvalidStep`] if `step` is not finite and positive, and
/// [`ScaleError::LegendTooLarge`] if the legend would exceed [`MAX_LEGEND_ENTRIES`].
///
/// # Examples
///
/// ```
/// use choropleth::{build_legend, ColorScale, Domain};
///
/// let scale = ColorScale::default();
/// let domain = Domain::new(-5.0, 23.0).unwrap();
/// let values: Vec<f64> = build_legend(&scale, &domain, 10.0)
///     .unwrap()
///     .iter()
///     .map(|entry| entry.value)
///     .collect();
/// assert_eq!(values, vec![30.0, 20.0, 10.0, 0.0, -10.0]);
/// ```
pub fn build_legend(
    scale: &ColorScale,
    domain: &Domain,
    step: f64,
) -> Result<Vec<LegendEntry>, ScaleError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ScaleError::InvalidStep(step));
    }
    if domain.is_degenerate() {
        return Ok(vec![LegendEntry {
            value: domain.min(),
            color: scale.color_for(domain.min(), domain),
        }]);
    }

    // integer multiples keep the values free of accumulated float drift
    let first = (domain.min() / step).floor();
    let last = (domain.max() / step).ceil();
    let entries = entry_count(last - first + 1.0)?;
    Ok((0..entries)
        .rev()
        .map(|offset| {
            let value = (first + offset as f64) * step;
            LegendEntry {
                value,
                color: scale.color_for(value, domain),
            }
        })
        .collect())
}

fn entry_count(entries: f64) -> Result<usize, ScaleError> {
    if !entries.is_finite() || entries > MAX_LEGEND_ENTRIES as f64 {
        return Err(ScaleError::LegendTooLarge { entries });
    }
    // finite and within 1..=MAX_LEGEND_ENTRIES, so the conversion is exact
    let whole = entries as u64;
    usize::try_from(whole).map_err(|_| ScaleError::LegendTooLarge { entries })
}
