// Uncertainty banding: point estimate -> symmetric market band.

use shared::models::MarketBand;
use shared::utils::currency::{format_amount, round2};

/// Build the market band around a point estimate. `mae` is the configured
/// half-width (see `EngineSettings::mae`); both bounds are rounded to two
/// decimals, half away from zero. Total over all finite inputs; a negative
/// lower bound is left as-is.
pub fn band(prediction: f64, mae: f64) -> MarketBand {
    let lower_bound = round2(prediction - mae);
    let upper_bound = round2(prediction + mae);
    let range_label = format!(
        "{} ~ {}",
        format_amount(lower_bound),
        format_amount(upper_bound)
    );

    MarketBand {
        lower_bound,
        upper_bound,
        range_label,
    }
}
