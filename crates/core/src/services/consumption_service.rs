use std::collections::HashMap;

use crate::models::reading::{DerivedReading, Reading};

/// Derives per-reading consumption and cost from the raw reading log.
///
/// Pure business logic — no I/O, no state. Easy to test.
pub struct ConsumptionService;

impl ConsumptionService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the derived series for an unordered set of readings.
    ///
    /// Readings are grouped per vehicle and sorted by `(date, id)` —
    /// the id tie-break keeps repeated runs identical when two readings
    /// share a date. The first reading of each vehicle carries zero
    /// consumption; every later one carries the meter delta to its
    /// predecessor, priced at the *current* reading's rate.
    ///
    /// A meter decrease (counter reset or mistyped value) produces a
    /// negative delta and propagates unclamped.
    ///
    /// Output has the same cardinality as the input; its order is
    /// unspecified — callers re-sort for display.
    pub fn derive(&self, readings: &[Reading]) -> Vec<DerivedReading> {
        let mut groups: HashMap<&str, Vec<&Reading>> = HashMap::new();
        for reading in readings {
            groups
                .entry(reading.vehicle_id.as_str())
                .or_default()
                .push(reading);
        }

        let mut derived = Vec::with_capacity(readings.len());
        for group in groups.values_mut() {
            group.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

            let mut prev_meter: Option<f64> = None;
            for reading in group.iter() {
                let consumption_kwh = match prev_meter {
                    Some(prev) => reading.meter_reading - prev,
                    None => 0.0,
                };
                prev_meter = Some(reading.meter_reading);
                derived.push(DerivedReading::from_reading(reading, consumption_kwh));
            }
        }

        derived
    }
}

impl Default for ConsumptionService {
    fn default() -> Self {
        Self::new()
    }
}
