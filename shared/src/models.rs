use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::currency;

/// Vehicle make. The reference dataset only covers these two manufacturers,
/// so the field is a closed enum rather than a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Make {
    Toyota,
    Honda,
}

impl Make {
    pub const ALL: [Make; 2] = [Make::Toyota, Make::Honda];

    /// The lowercase label the prediction artifact was trained on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Make::Toyota => "toyota",
            Make::Honda => "honda",
        }
    }

    pub fn parse(s: &str) -> Option<Make> {
        match s {
            "toyota" => Some(Make::Toyota),
            "honda" => Some(Make::Honda),
            _ => None,
        }
    }
}

impl fmt::Display for Make {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight attributes describing one used car, in no particular order here.
/// The engine's assembler owns the fixed feature ordering the model expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarFeatures {
    pub miles: f64,
    pub year: i32,
    pub make: Make,
    pub model: String,
    pub trim: String,
    pub body_type: String,
    pub engine_size: f64,
    pub province: String,
}

/// Where an asking price falls relative to the predicted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketCategory {
    BelowMarket,
    InRange,
    AboveMarket,
}

/// One display-ready entry for the result panels: a label, an already
/// formatted currency value, and the semantic category the rendering layer
/// maps to a color. Keeps markup concerns out of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandMetric {
    pub label: String,
    pub value: String,
    pub category: MarketCategory,
}

/// Symmetric confidence band around a point estimate, bounds rounded to two
/// decimals. The lower bound may be negative for very cheap cars; it is
/// deliberately not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketBand {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub range_label: String,
}

impl MarketBand {
    /// The three panel entries shown under the headline estimate.
    pub fn metrics(&self) -> [BandMetric; 3] {
        [
            BandMetric {
                label: "Cheaper than market if below".to_string(),
                value: format!("${}", currency::format_amount(self.lower_bound)),
                category: MarketCategory::BelowMarket,
            },
            BandMetric {
                label: "Normal range".to_string(),
                value: format!("${}", self.range_label),
                category: MarketCategory::InRange,
            },
            BandMetric {
                label: "Expensive if over".to_string(),
                value: format!("${}", currency::format_amount(self.upper_bound)),
                category: MarketCategory::AboveMarket,
            },
        ]
    }
}

/// Result of one form submission. Overwritten wholesale by the next
/// submission; the GUI holds at most one of these per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Point estimate, rounded to two decimals.
    pub prediction: f64,
    pub band: MarketBand,
    pub predicted_at: DateTime<Utc>,
}
