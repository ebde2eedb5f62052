pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use uuid::Uuid;

use errors::CoreError;
use models::{
    analytics::{ConsumptionTotals, YearlySummary},
    chart::MonthlyUsageChart,
    reading::{DerivedReading, Reading},
    settings::Settings,
};
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService,
    consumption_service::ConsumptionService,
};
use storage::{config::StorageConfig, record_store::RecordStore, settings_store::SettingsStore};

/// Main entry point for the Charge Tracker core library.
/// Owns the stores and all services needed to operate on them.
///
/// Every statistics call is a full load → derive → aggregate pass over
/// the stored readings; nothing is cached between calls.
#[must_use]
pub struct ChargeTracker {
    record_store: RecordStore,
    settings_store: SettingsStore,
    consumption_service: ConsumptionService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
}

impl std::fmt::Debug for ChargeTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChargeTracker")
            .field("data_path", &self.record_store.path())
            .field("settings_path", &self.settings_store.path())
            .finish()
    }
}

impl ChargeTracker {
    /// Create a tracker over the given storage locations.
    /// Files are created lazily on first write.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            record_store: RecordStore::new(config.data_path),
            settings_store: SettingsStore::new(config.settings_path),
            consumption_service: ConsumptionService::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
        }
    }

    // ── Readings ────────────────────────────────────────────────────

    /// Log a new reading. Returns its freshly generated id.
    pub fn add_reading(
        &self,
        vehicle_id: impl Into<String>,
        date: NaiveDate,
        meter_reading: f64,
        price_per_kwh: f64,
    ) -> Result<Uuid, CoreError> {
        let reading = Reading::new(vehicle_id, date, meter_reading, price_per_kwh);
        let id = reading.id;
        self.record_store.append(&reading)?;
        Ok(id)
    }

    /// All stored readings, in file order.
    pub fn readings(&self) -> Result<Vec<Reading>, CoreError> {
        self.record_store.load_all()
    }

    /// Delete a reading by id. An absent id is a no-op, not an error.
    pub fn delete_reading(&self, id: Uuid) -> Result<(), CoreError> {
        self.record_store.delete(id)
    }

    /// Readings of a single vehicle, in file order.
    pub fn readings_for_vehicle(&self, vehicle_id: &str) -> Result<Vec<Reading>, CoreError> {
        Ok(self
            .record_store
            .load_all()?
            .into_iter()
            .filter(|r| r.vehicle_id == vehicle_id)
            .collect())
    }

    /// Distinct vehicle labels present in the log, sorted.
    pub fn vehicle_ids(&self) -> Result<Vec<String>, CoreError> {
        let mut seen = std::collections::HashSet::new();
        let mut ids: Vec<String> = self
            .record_store
            .load_all()?
            .into_iter()
            .filter_map(|r| {
                if seen.insert(r.vehicle_id.clone()) {
                    Some(r.vehicle_id)
                } else {
                    None
                }
            })
            .collect();
        ids.sort();
        Ok(ids)
    }

    /// Total number of stored readings.
    pub fn reading_count(&self) -> Result<usize, CoreError> {
        Ok(self.record_store.load_all()?.len())
    }

    // ── Derived series ──────────────────────────────────────────────

    /// The derived consumption/cost series over all stored readings.
    /// Output order is unspecified; use `derived_readings_for_display`
    /// for the listing order.
    pub fn derived_readings(&self) -> Result<Vec<DerivedReading>, CoreError> {
        let readings = self.record_store.load_all()?;
        Ok(self.consumption_service.derive(&readings))
    }

    /// Derived readings in listing order: by vehicle, then date, newest
    /// first within each vehicle.
    pub fn derived_readings_for_display(&self) -> Result<Vec<DerivedReading>, CoreError> {
        let mut derived = self.derived_readings()?;
        derived.sort_by(|a, b| {
            b.vehicle_id
                .cmp(&a.vehicle_id)
                .then_with(|| b.date.cmp(&a.date))
        });
        Ok(derived)
    }

    // ── Statistics ──────────────────────────────────────────────────

    /// Per-year consumption and cost sums, sorted by year ascending.
    pub fn yearly_summaries(&self) -> Result<Vec<YearlySummary>, CoreError> {
        let derived = self.derived_readings()?;
        Ok(self.analytics_service.yearly_summaries(&derived))
    }

    /// Grand totals across the whole log.
    pub fn totals(&self) -> Result<ConsumptionTotals, CoreError> {
        let derived = self.derived_readings()?;
        Ok(self.analytics_service.totals(&derived))
    }

    /// Month-by-year consumption comparison for the statistics chart.
    pub fn monthly_usage_chart(&self) -> Result<MonthlyUsageChart, CoreError> {
        let derived = self.derived_readings()?;
        Ok(self.chart_service.monthly_usage_chart(&derived))
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Current settings, or defaults when none have been saved yet.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings_store.load()
    }

    /// Persist new settings, overwriting the prior document.
    pub fn save_settings(&self, settings: &Settings) -> Result<(), CoreError> {
        self.settings_store.save(settings)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all stored readings as a JSON string.
    pub fn export_readings_to_json(&self) -> Result<String, CoreError> {
        let readings = self.record_store.load_all()?;
        serde_json::to_string_pretty(&readings)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize readings to JSON: {e}")))
    }
}
