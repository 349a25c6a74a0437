// The three market-position panels rendered under the headline estimate.
// Pure presentation over `MarketBand::metrics()`; the semantic category of
// each entry picks its color from the active palette.

#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use shared::models::PriceEstimate;

#[component]
pub fn BandPanels(estimate: PriceEstimate) -> Element {
    let palette = use_context::<ThemePalette>();

    let panel_style = format!(
        "border: 1px solid {}; border-radius: 8px; padding: 10px; margin: 10px; \
         text-align: center; background-color: {}; flex: 1;",
        palette.panel_border, palette.panel_background
    );

    let panels = estimate.band.metrics().into_iter().map(|metric| {
        let color = palette.color_for(metric.category).to_string();
        let panel_style = panel_style.clone();
        rsx! {
            div {
                style: "{panel_style}",
                div { style: "font-size: 14px; color: {color};", "{metric.label}" }
                div { style: "font-size: 20px; color: {color};", "{metric.value}" }
            }
        }
    });

    rsx! {
        div { style: "display: flex;", {panels} }
    }
}
