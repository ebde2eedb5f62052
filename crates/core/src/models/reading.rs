use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged meter observation for a vehicle.
///
/// **Important**: Readings store the *cumulative* charging-meter value,
/// not the energy drawn since the last session. Per-session consumption
/// is derived by diffing consecutive readings of the same vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Free-text vehicle label; readings sharing a label form one series
    pub vehicle_id: String,

    /// Date of the reading (no time component — daily granularity)
    pub date: NaiveDate,

    /// Cumulative meter value in kWh
    pub meter_reading: f64,

    /// Price per kWh in effect at this reading
    pub price_per_kwh: f64,
}

impl Reading {
    pub fn new(
        vehicle_id: impl Into<String>,
        date: NaiveDate,
        meter_reading: f64,
        price_per_kwh: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id: vehicle_id.into(),
            date,
            meter_reading,
            price_per_kwh,
        }
    }
}

/// A reading enriched with the consumption and cost computed against
/// its predecessor in the same vehicle's series.
///
/// Never persisted — recomputed from the stored readings on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedReading {
    /// Id of the underlying reading
    pub id: Uuid,

    /// Vehicle the reading belongs to
    pub vehicle_id: String,

    /// Date of the reading
    pub date: NaiveDate,

    /// Cumulative meter value in kWh
    pub meter_reading: f64,

    /// Price per kWh in effect at this reading
    pub price_per_kwh: f64,

    /// Meter delta to the previous reading of the same vehicle;
    /// 0 for the first reading of a series. A meter decrease (reset or
    /// mistyped value) yields a negative delta — it is not clamped.
    pub consumption_kwh: f64,

    /// `consumption_kwh × price_per_kwh` of *this* reading
    pub cost: f64,
}

impl DerivedReading {
    /// Build the projection for one reading given its computed delta.
    /// Cost is always priced at the current reading's rate.
    pub fn from_reading(reading: &Reading, consumption_kwh: f64) -> Self {
        Self {
            id: reading.id,
            vehicle_id: reading.vehicle_id.clone(),
            date: reading.date,
            meter_reading: reading.meter_reading,
            price_per_kwh: reading.price_per_kwh,
            consumption_kwh,
            cost: consumption_kwh * reading.price_per_kwh,
        }
    }
}
