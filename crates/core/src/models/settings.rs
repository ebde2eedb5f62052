use serde::{Deserialize, Serialize};

/// Fallback price per kWh used until the user saves their own default.
pub const DEFAULT_PRICE_PER_KWH: f64 = 0.30;

/// User-configurable defaults used to pre-fill the new-reading form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Vehicle pre-selected for new readings (may be empty)
    #[serde(default)]
    pub default_vehicle: String,

    /// Price per kWh pre-filled for new readings
    #[serde(default = "default_price")]
    pub default_price: f64,
}

fn default_price() -> f64 {
    DEFAULT_PRICE_PER_KWH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_vehicle: String::new(),
            default_price: DEFAULT_PRICE_PER_KWH,
        }
    }
}
