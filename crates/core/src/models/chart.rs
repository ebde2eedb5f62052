use serde::{Deserialize, Serialize};

/// Month labels for chart axes, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One year's monthly consumption, ready for chart rendering.
///
/// The core computes all the numbers — the frontend just renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Calendar year this series covers
    pub year: i32,

    /// Consumption per month, index 0 = January; months without data stay 0
    pub monthly_kwh: [f64; 12],
}

/// Month-by-year consumption comparison for the statistics view.
///
/// One series per calendar year present in the data, sorted ascending.
/// Every series has exactly 12 cells, so the frontend can overlay years
/// on a shared month axis without gap handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyUsageChart {
    /// Per-year series, sorted by year ascending
    pub series: Vec<MonthlySeries>,
}

impl MonthlyUsageChart {
    /// The distinct years covered, in ascending order.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.series.iter().map(|s| s.year).collect()
    }

    /// `true` when no readings produced any series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
