use thiserror::Error;

/// Errors raised while building or evaluating a waveform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveformError {
    /// A construction parameter is out of its allowed range.
    #[error("{name} must be {bound}. Was {value}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        bound: String,
    },

    /// The polyline has zero length, so its performance ratio is undefined.
    #[error("polyline of {points} point(s) has zero length")]
    DegenerateCurve { points: usize },
}

impl WaveformError {
    pub(crate) fn invalid<V: ToString>(name: &'static str, value: V, bound: impl Into<String>) -> Self {
        WaveformError::InvalidArgument {
            name,
            value: value.to_string(),
            bound: bound.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_value_and_bound() {
        let err = WaveformError::invalid("x", 300, "between 0 and 250");
        assert_eq!(err.to_string(), "x must be between 0 and 250. Was 300");
    }

    #[test]
    fn degenerate_curve_message() {
        let err = WaveformError::DegenerateCurve { points: 1 };
        assert_eq!(err.to_string(), "polyline of 1 point(s) has zero length");
    }
}
