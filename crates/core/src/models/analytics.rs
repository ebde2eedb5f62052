use serde::{Deserialize, Serialize};

/// Consumption and cost summed over one calendar year, across all vehicles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    /// Calendar year this summary covers
    pub year: i32,

    /// Sum of derived consumption for the year
    pub consumption_kwh: f64,

    /// Sum of derived cost for the year
    pub cost: f64,
}

/// Grand totals over the whole derived reading set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsumptionTotals {
    /// Total consumption across all vehicles and years
    pub consumption_kwh: f64,

    /// Total cost across all vehicles and years
    pub cost: f64,
}
