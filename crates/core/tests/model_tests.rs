// ═══════════════════════════════════════════════════════════════════
// Model Tests — Reading, DerivedReading, Settings, chart models
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use charge_tracker_core::models::analytics::{ConsumptionTotals, YearlySummary};
use charge_tracker_core::models::chart::{MonthlySeries, MonthlyUsageChart, MONTH_LABELS};
use charge_tracker_core::models::reading::{DerivedReading, Reading};
use charge_tracker_core::models::settings::{Settings, DEFAULT_PRICE_PER_KWH};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Reading
// ═══════════════════════════════════════════════════════════════════

mod reading {
    use super::*;

    #[test]
    fn new_sets_all_fields() {
        let r = Reading::new("CarA", d(2023, 1, 1), 1000.0, 0.30);
        assert_eq!(r.vehicle_id, "CarA");
        assert_eq!(r.date, d(2023, 1, 1));
        assert_eq!(r.meter_reading, 1000.0);
        assert_eq!(r.price_per_kwh, 0.30);
    }

    #[test]
    fn new_generates_unique_ids() {
        let a = Reading::new("CarA", d(2023, 1, 1), 1000.0, 0.30);
        let b = Reading::new("CarA", d(2023, 1, 1), 1000.0, 0.30);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn accepts_string_and_str_vehicle_ids() {
        let a = Reading::new("CarA", d(2023, 1, 1), 1.0, 0.1);
        let b = Reading::new(String::from("CarA"), d(2023, 1, 1), 1.0, 0.1);
        assert_eq!(a.vehicle_id, b.vehicle_id);
    }

    #[test]
    fn serde_json_round_trip() {
        let r = Reading::new("CarA", d(2023, 6, 15), 1234.5, 0.42);
        let json = serde_json::to_string(&r).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn serde_date_is_iso_8601() {
        let r = Reading::new("CarA", d(2023, 1, 8), 1100.0, 0.30);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"2023-01-08\""));
    }

    #[test]
    fn clone_preserves_id() {
        let r = Reading::new("CarA", d(2023, 1, 1), 1000.0, 0.30);
        let c = r.clone();
        assert_eq!(r.id, c.id);
        assert_eq!(r, c);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DerivedReading
// ═══════════════════════════════════════════════════════════════════

mod derived_reading {
    use super::*;

    #[test]
    fn from_reading_copies_base_fields() {
        let r = Reading::new("CarA", d(2023, 1, 8), 1100.0, 0.30);
        let der = DerivedReading::from_reading(&r, 100.0);
        assert_eq!(der.id, r.id);
        assert_eq!(der.vehicle_id, "CarA");
        assert_eq!(der.date, d(2023, 1, 8));
        assert_eq!(der.meter_reading, 1100.0);
        assert_eq!(der.price_per_kwh, 0.30);
    }

    #[test]
    fn cost_is_consumption_times_current_price() {
        let r = Reading::new("CarA", d(2023, 1, 8), 1100.0, 0.30);
        let der = DerivedReading::from_reading(&r, 100.0);
        assert_eq!(der.consumption_kwh, 100.0);
        assert_eq!(der.cost, 30.0);
    }

    #[test]
    fn zero_consumption_zero_cost() {
        let r = Reading::new("CarA", d(2023, 1, 1), 1000.0, 0.30);
        let der = DerivedReading::from_reading(&r, 0.0);
        assert_eq!(der.consumption_kwh, 0.0);
        assert_eq!(der.cost, 0.0);
    }

    #[test]
    fn negative_consumption_yields_negative_cost() {
        let r = Reading::new("CarA", d(2023, 2, 1), 1050.0, 0.50);
        let der = DerivedReading::from_reading(&r, -50.0);
        assert_eq!(der.consumption_kwh, -50.0);
        assert_eq!(der.cost, -25.0);
    }

    #[test]
    fn serde_json_round_trip() {
        let r = Reading::new("CarB", d(2024, 3, 2), 500.0, 0.25);
        let der = DerivedReading::from_reading(&r, 42.0);
        let json = serde_json::to_string(&der).unwrap();
        let back: DerivedReading = serde_json::from_str(&json).unwrap();
        assert_eq!(der, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_vehicle_is_empty() {
        assert_eq!(Settings::default().default_vehicle, "");
    }

    #[test]
    fn default_price_constant() {
        assert_eq!(DEFAULT_PRICE_PER_KWH, 0.30);
        assert_eq!(Settings::default().default_price, DEFAULT_PRICE_PER_KWH);
    }

    #[test]
    fn serde_json_round_trip() {
        let s = Settings {
            default_vehicle: "CarA".into(),
            default_price: 0.42,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn missing_price_falls_back_to_constant() {
        let s: Settings = serde_json::from_str(r#"{"default_vehicle":"CarB"}"#).unwrap();
        assert_eq!(s.default_vehicle, "CarB");
        assert_eq!(s.default_price, DEFAULT_PRICE_PER_KWH);
    }

    #[test]
    fn missing_vehicle_falls_back_to_empty() {
        let s: Settings = serde_json::from_str(r#"{"default_price":0.55}"#).unwrap();
        assert_eq!(s.default_vehicle, "");
        assert_eq!(s.default_price, 0.55);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Analytics models
// ═══════════════════════════════════════════════════════════════════

mod analytics_models {
    use super::*;

    #[test]
    fn totals_default_is_zero() {
        let t = ConsumptionTotals::default();
        assert_eq!(t.consumption_kwh, 0.0);
        assert_eq!(t.cost, 0.0);
    }

    #[test]
    fn yearly_summary_serde_round_trip() {
        let y = YearlySummary {
            year: 2023,
            consumption_kwh: 150.0,
            cost: 45.0,
        };
        let json = serde_json::to_string(&y).unwrap();
        let back: YearlySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(y, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart models
// ═══════════════════════════════════════════════════════════════════

mod chart_models {
    use super::*;

    #[test]
    fn twelve_month_labels_starting_january() {
        assert_eq!(MONTH_LABELS.len(), 12);
        assert_eq!(MONTH_LABELS[0], "Jan");
        assert_eq!(MONTH_LABELS[11], "Dec");
    }

    #[test]
    fn years_lists_series_years_in_order() {
        let chart = MonthlyUsageChart {
            series: vec![
                MonthlySeries {
                    year: 2022,
                    monthly_kwh: [0.0; 12],
                },
                MonthlySeries {
                    year: 2023,
                    monthly_kwh: [0.0; 12],
                },
            ],
        };
        assert_eq!(chart.years(), vec![2022, 2023]);
    }

    #[test]
    fn empty_chart_is_empty() {
        let chart = MonthlyUsageChart { series: vec![] };
        assert!(chart.is_empty());
        assert!(chart.years().is_empty());
    }

    #[test]
    fn series_serde_round_trip() {
        let mut cells = [0.0; 12];
        cells[0] = 100.0;
        cells[11] = 55.5;
        let s = MonthlySeries {
            year: 2024,
            monthly_kwh: cells,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: MonthlySeries = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
