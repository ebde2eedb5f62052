use chrono::Datelike;
use std::collections::BTreeMap;

use crate::models::chart::{MonthlySeries, MonthlyUsageChart};
use crate::models::reading::DerivedReading;

/// Generates chart-ready data sets from the derived reading log.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the month-by-year consumption comparison.
    ///
    /// One series per calendar year present in the data, sorted
    /// ascending. Each series holds exactly 12 cells (January first);
    /// months without readings stay at 0 rather than being omitted.
    pub fn monthly_usage_chart(&self, derived: &[DerivedReading]) -> MonthlyUsageChart {
        let mut by_year: BTreeMap<i32, [f64; 12]> = BTreeMap::new();
        for entry in derived {
            let cells = by_year.entry(entry.date.year()).or_insert([0.0; 12]);
            cells[entry.date.month0() as usize] += entry.consumption_kwh;
        }

        MonthlyUsageChart {
            series: by_year
                .into_iter()
                .map(|(year, monthly_kwh)| MonthlySeries { year, monthly_kwh })
                .collect(),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
