//! Core traits for range validators
//!
//! These traits define the interface every bus range rule implements.
//! Keep them simple - the engine calls them once per quantity per cycle.

/// How a rule brings an out-of-range value back into range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeKind {
    /// Magnitudes: values beyond a bound are pinned to that bound
    Saturating,
    /// Directions and angles: values are folded back by whole turns
    Wrapping,
}

/// Bus constraints enforced by a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Lowest legal value
    pub min_value: f64,

    /// Highest legal value
    pub max_value: f64,

    /// Saturating or wrapping
    pub kind: RangeKind,
}

/// What a validator did to a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Already legal, returned bit-identical
    Unchanged(f64),
    /// Saturated to a bound
    Clamped {
        /// The value before clamping
        original: f64,
        /// The bound it was pinned to
        value: f64,
    },
    /// Folded back by whole turns
    Wrapped {
        /// The value before wrapping
        original: f64,
        /// The equivalent in-range angle
        value: f64,
    },
}

impl Adjustment {
    /// The value to publish
    pub fn value(&self) -> f64 {
        match *self {
            Adjustment::Unchanged(value) => value,
            Adjustment::Clamped { value, .. } => value,
            Adjustment::Wrapped { value, .. } => value,
        }
    }

    /// True when the validator had to change the value
    pub fn is_adjusted(&self) -> bool {
        !matches!(self, Adjustment::Unchanged(_))
    }
}

/// Core validator trait - implement this for each bus quantity
///
/// Unlike a rejecting validator, a bus validator never fails: an illegal
/// value is brought into range and the adjustment is reported.
pub trait Validator {
    /// Bring a present value into the legal range
    fn constrain(&self, value: f64) -> Adjustment;

    /// Get bus constraints for this validator
    fn constraints(&self) -> ValidatorConstraints;

    /// Check whether a value is already legal
    fn accepts(&self, value: f64) -> bool {
        !self.constrain(value).is_adjusted()
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for Option<f64> {
    fn is_valid(&self) -> bool {
        self.map_or(false, |v| v.is_finite())
    }
}

/// Keep a value only if it is a finite number
///
/// Absent, NaN and infinite inputs are all the same thing to the engine.
#[inline]
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }

    #[test]
    fn validatable_options() {
        assert!(Some(1.0).is_valid());
        assert!(!None::<f64>.is_valid());
        assert!(!Some(f64::NAN).is_valid());
    }

    #[test]
    fn finite_filters_non_numbers() {
        assert_eq!(finite(Some(2.5)), Some(2.5));
        assert_eq!(finite(Some(f64::NAN)), None);
        assert_eq!(finite(Some(f64::NEG_INFINITY)), None);
        assert_eq!(finite(None), None);
    }

    #[test]
    fn adjustment_value() {
        let clamped = Adjustment::Clamped { original: 400.0, value: 358.15 };
        assert_eq!(clamped.value(), 358.15);
        assert!(clamped.is_adjusted());
        assert!(!Adjustment::Unchanged(1.0).is_adjusted());
    }
}
