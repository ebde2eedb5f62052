use chrono::Datelike;
use std::collections::BTreeMap;

use crate::models::analytics::{ConsumptionTotals, YearlySummary};
use crate::models::reading::DerivedReading;

/// Computes calendar aggregates over the derived reading set.
///
/// All functions are pure; an empty input yields empty/zero results,
/// never an error.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Sum consumption and cost per calendar year, across all vehicles.
    /// Output is sorted by year ascending.
    pub fn yearly_summaries(&self, derived: &[DerivedReading]) -> Vec<YearlySummary> {
        let mut by_year: BTreeMap<i32, (f64, f64)> = BTreeMap::new();
        for entry in derived {
            let sums = by_year.entry(entry.date.year()).or_insert((0.0, 0.0));
            sums.0 += entry.consumption_kwh;
            sums.1 += entry.cost;
        }

        by_year
            .into_iter()
            .map(|(year, (consumption_kwh, cost))| YearlySummary {
                year,
                consumption_kwh,
                cost,
            })
            .collect()
    }

    /// Grand totals across the whole derived set.
    pub fn totals(&self, derived: &[DerivedReading]) -> ConsumptionTotals {
        let mut totals = ConsumptionTotals::default();
        for entry in derived {
            totals.consumption_kwh += entry.consumption_kwh;
            totals.cost += entry.cost;
        }
        totals
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
