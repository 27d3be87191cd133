use crate::scale::error::ScaleError;
use ordered_float::OrderedFloat;

/// The value range a color scale is calibrated to.
///
/// Both bounds are finite and `min <= max`. A domain with `min == max` is valid and
/// degenerates to a single color.
///
/// # Examples
///
/// ```
/// use choropleth::Domain;
///
/// let domain = Domain::new(-5.0, 23.0).unwrap();
/// assert_eq!(domain.mid(), 9.0);
/// assert!(Domain::new(10.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ScaleError::NonFiniteDomain { min, max });
        }
        if min > max {
            return Err(ScaleError::InvertedDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// The smallest domain containing every finite value, or `None` if there is none.
    pub fn spanning<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .map(OrderedFloat)
            .fold(None, |acc: Option<(OrderedFloat<f64>, OrderedFloat<f64>)>, v| {
                Some(match acc {
                    None => (v, v),
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                })
            })?;
        Some(Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Halves each bound before adding, so the sum cannot overflow.
    pub fn mid(&self) -> f64 {
        self.min / 2.0 + self.max / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}
