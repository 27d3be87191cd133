//! Piecewise linear color interpolation between three anchors.

use crate::types::color::{Color, ColorStops};
use crate::types::domain::Domain;

/// Maps values of a [`Domain`] onto colors.
///
/// The domain minimum maps to the low anchor, its midpoint to the mid anchor and its
/// maximum to the high anchor. Values in between are interpolated per RGB channel
/// within their half of the domain, values outside are clamped.
///
/// # Examples
///
/// ```
/// use choropleth::{Color, ColorScale, ColorStops, Domain};
///
/// let scale = ColorScale::new(ColorStops::new(
///     Color::new(0, 0, 255),
///     Color::new(255, 255, 255),
///     Color::new(255, 0, 0),
/// ));
/// let domain = Domain::new(0.0, 30.0).unwrap();
///
/// assert_eq!(scale.color_for(15.0, &domain), Color::new(255, 255, 255));
/// assert_eq!(scale.color_for(-40.0, &domain), Color::new(0, 0, 255));
/// assert_eq!(scale.color_for(7.5, &domain), Color::new(128, 128, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorScale {
    stops: ColorStops,
}

impl ColorScale {
    pub fn new(stops: ColorStops) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    pub fn color_for(&self, value: f64, domain: &Domain) -> Color {
        let (min, mid, max) = (domain.min(), domain.mid(), domain.max());
        if domain.is_degenerate() || value.is_nan() {
            return self.stops.mid;
        }
        if value <= min {
            return self.stops.low;
        }
        if value >= max {
            return self.stops.high;
        }
        if value == mid {
            return self.stops.mid;
        }
        if value < mid {
            lerp(self.stops.low, self.stops.mid, (value - min) / (mid - min))
        } else {
            lerp(self.stops.mid, self.stops.high, (value - mid) / (max - mid))
        }
    }
}

fn lerp(from: Color, to: Color, t: f64) -> Color {
    let channel = |a: u8, b: u8| {
        let (a, b) = (f64::from(a), f64::from(b));
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    };
    Color::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}
