use std::fmt;

/// Errors raised by the element model, the containers and the document builder.
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    #[error("{field} out of range: {value} not in {interval}")]
    Range {
        field: &'static str,
        value: String,
        interval: Interval,
    },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("index {index} out of range on axis {axis} (extent {extent})")]
    IndexOutOfRange {
        axis: usize,
        index: usize,
        extent: usize,
    },

    #[error("duplicate element identity '{0}'")]
    DuplicateIdentity(String),

    #[error("unsupported structure type '{0}'")]
    UnsupportedStructure(String),

    #[error("element handle {0} is not owned by this container")]
    UnknownElement(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;

/// Legal interval reported by [`VizError::Range`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
    pub min_exclusive: bool,
}

impl Interval {
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
        }
    }

    /// `(min, max]`
    pub const fn left_open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: true,
        }
    }

    pub fn contains(&self, v: f64) -> bool {
        // NaN fails both comparisons
        let above = if self.min_exclusive {
            v > self.min
        } else {
            v >= self.min
        };
        above && v <= self.max
    }

    /// Checks `v` against the interval, naming `field` in the error.
    pub(crate) fn check(&self, field: &'static str, v: f64) -> Result<f64> {
        if self.contains(v) {
            Ok(v)
        } else {
            Err(VizError::Range {
                field,
                value: v.to_string(),
                interval: *self,
            })
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.min_exclusive { '(' } else { '[' };
        write!(f, "{}{}, {}]", open, self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_bounds() {
        let i = Interval::left_open(0.0, 50.0);
        assert!(!i.contains(0.0));
        assert!(i.contains(50.0));
        assert!(!i.contains(f64::NAN));
        assert_eq!(i.to_string(), "(0, 50]");
        assert!(Interval::closed(0.0, 1.0).contains(0.0));
    }

    #[test]
    fn range_error_names_field() {
        let err = Interval::closed(0.0, 255.0).check("red", 300.0).unwrap_err();
        assert_eq!(err.to_string(), "red out of range: 300 not in [0, 255]");
    }
}
