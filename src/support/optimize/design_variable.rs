use thiserror::Error;

/// Bounds on a single design variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignVariable {
    lower: f64,
    upper: f64,
}

/// Errors that can occur when constructing a [`DesignVariable`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DesignVariableError {
    #[error("design variable bound is not a number")]
    NotANumber,

    #[error("lower bound {lower} exceeds upper bound {upper}")]
    Inverted { lower: f64, upper: f64 },
}

impl DesignVariable {
    /// Creates a design variable bounded by `[lower, upper]`.
    ///
    /// Infinite bounds are allowed and leave that side unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is `NaN` or if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DesignVariableError> {
        if lower.is_nan() || upper.is_nan() {
            return Err(DesignVariableError::NotANumber);
        }
        if lower > upper {
            return Err(DesignVariableError::Inverted { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Creates a design variable with no bounds.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Clamps `x` into the bounds.
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.lower, self.upper)
    }
}

/// Projects each component of `x` onto its bounds.
pub(super) fn project<const N: usize>(x: [f64; N], bounds: &[DesignVariable; N]) -> [f64; N] {
    std::array::from_fn(|i| bounds[i].clamp(x[i]))
}
