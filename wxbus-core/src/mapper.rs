//! Defaulting Mapper
//!
//! Last stage of a cycle. Turns a validated [`CandidateSet`] into the
//! fixed-shape [`MeasurementBatch`], one slot per [`Parameter`]:
//!
//! - a finite value is published as-is
//! - an absent or non-finite value is replaced by its default
//!
//! Every slot is decided on its own; a missing pressure never affects the
//! temperature slots. The mapper cannot fail and never returns a partial
//! batch, so the bus always sees a complete picture even on a cycle where
//! the provider returned nothing at all.
//!
//! ```rust
//! use wxbus_core::batch::Parameter;
//! use wxbus_core::config::DefaultTable;
//! use wxbus_core::mapper::DefaultingMapper;
//! use wxbus_core::observation::CandidateSet;
//! use wxbus_core::time::to_datetime;
//!
//! let defaults = DefaultTable::default();
//! let batch = DefaultingMapper::new(&defaults).map(&CandidateSet::new(), None, to_datetime(0));
//!
//! assert_eq!(batch.value(Parameter::OutsideTemperature), Some(273.15));
//! assert_eq!(batch.value(Parameter::AtmosphericPressure), Some(101_325.0));
//! assert_eq!(batch.value(Parameter::RelativeHumidity), Some(0.5));
//! ```

use chrono::{DateTime, Utc};

use crate::{
    batch::{MeasurementBatch, Parameter},
    config::DefaultTable,
    observation::{CandidateSet, Description, Quantity},
    traits::finite,
};

/// Builds batches, substituting defaults for unknown quantities
#[derive(Debug, Clone, Copy)]
pub struct DefaultingMapper<'a> {
    defaults: &'a DefaultTable,
}

impl<'a> DefaultingMapper<'a> {
    /// Mapper over a default table
    pub fn new(defaults: &'a DefaultTable) -> Self {
        Self { defaults }
    }

    /// Value to publish for one quantity, and whether it was defaulted
    pub fn resolve(&self, set: &CandidateSet, quantity: Quantity) -> (f64, bool) {
        match finite(set.get(quantity)) {
            Some(value) => (value, false),
            None => (self.defaults.for_quantity(quantity), true),
        }
    }

    /// Build the batch for one cycle
    pub fn map(
        &self,
        set: &CandidateSet,
        description: Option<Description>,
        timestamp: DateTime<Utc>,
    ) -> MeasurementBatch {
        let mut values = [0.0; Parameter::COUNT];
        let mut defaulted = 0usize;

        for (slot, parameter) in values.iter_mut().zip(Parameter::ALL) {
            let (value, substituted) = self.resolve(set, parameter.quantity());
            if substituted {
                log_debug!("{} defaulted to {}", parameter.name(), value);
                defaulted += 1;
            }
            *slot = value;
        }

        if defaulted * 2 > Parameter::COUNT {
            log_warn!("{} of {} bus parameters defaulted", defaulted, Parameter::COUNT);
        }

        MeasurementBatch::from_values(values, description, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::to_datetime;

    #[test]
    fn empty_set_gets_every_default() {
        let defaults = DefaultTable::default();
        let mapper = DefaultingMapper::new(&defaults);
        let batch = mapper.map(&CandidateSet::new(), None, to_datetime(0));

        assert_eq!(batch.len(), Parameter::COUNT);
        for parameter in Parameter::ALL {
            assert_eq!(
                batch.value(parameter),
                Some(defaults.for_quantity(parameter.quantity())),
                "{}",
                parameter.name()
            );
        }
        assert_eq!(batch.value(Parameter::AirDensity), Some(1.225));
        assert_eq!(batch.value(Parameter::ApparentWindAngle), Some(0.0));
    }

    #[test]
    fn non_finite_treated_as_absent() {
        let defaults = DefaultTable::default();
        let mut set = CandidateSet::new();
        set.set(Quantity::Pressure, f64::NAN);
        set.set(Quantity::Humidity, f64::INFINITY);

        let mapper = DefaultingMapper::new(&defaults);
        assert_eq!(mapper.resolve(&set, Quantity::Pressure), (101_325.0, true));
        assert_eq!(mapper.resolve(&set, Quantity::Humidity), (0.5, true));
    }

    #[test]
    fn slots_are_independent() {
        let defaults = DefaultTable::default();
        let mut set = CandidateSet::new();
        set.set(Quantity::OutsideTemperature, 290.0);

        let batch = DefaultingMapper::new(&defaults).map(&set, None, to_datetime(0));
        assert_eq!(batch.value(Parameter::OutsideTemperature), Some(290.0));
        assert_eq!(batch.value(Parameter::DewPointTemperature), Some(273.15));
    }

    #[test]
    fn aliases_fan_out() {
        let defaults = DefaultTable::default();
        let mut set = CandidateSet::new();
        set.set(Quantity::TrueWindSpeed, 7.2);
        set.set(Quantity::WindChill, 265.0);

        let batch = DefaultingMapper::new(&defaults).map(&set, None, to_datetime(0));
        assert_eq!(batch.value(Parameter::WindSpeedOverGround), Some(7.2));
        assert_eq!(batch.value(Parameter::TrueWindSpeed), Some(7.2));
        assert_eq!(batch.value(Parameter::TheoreticalWindChillTemperature), Some(265.0));
    }

    #[test]
    fn custom_defaults() {
        let defaults = DefaultTable { humidity: 0.8, ..DefaultTable::default() };
        let mapper = DefaultingMapper::new(&defaults);
        let batch = mapper.map(&CandidateSet::new(), None, to_datetime(0));
        assert_eq!(batch.value(Parameter::RelativeHumidity), Some(0.8));
    }
}
