#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{BandPanels, PriceForm};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::EngineHandle;
use crate::state::app_state::AppState;
use shared::utils::currency::format_amount;

#[component]
pub fn App() -> Element {
    // One-time bootstrap, provided to every child through context: config,
    // engine handle (model + catalog), palette, and the session state.
    let config = use_context_provider(AppConfig::load_or_default);
    let engine = use_context_provider({
        let config = config.clone();
        move || EngineHandle::bootstrap(&config)
    });
    let palette = use_context_provider({
        let theme_name = config.app.theme.clone();
        move || ThemePalette::from_name(&theme_name)
    });
    let state = use_context_provider(|| Signal::new(AppState::default()));

    let page_style = format!(
        "background-color: {}; color: {}; min-height: 100vh; padding: 24px; \
         font-family: sans-serif;",
        palette.background, palette.foreground
    );

    // A model that never loaded means no prediction can ever happen; show
    // the fatal view instead of a form that cannot work.
    if let Some(message) = engine.load_error.clone() {
        return rsx! {
            div { style: "{page_style}",
                h1 { "🍁 Used car price calculator" }
                h3 { style: "color: {palette.band_expensive};",
                    "The prediction model could not be loaded"
                }
                p { "{message}" }
            }
        };
    }

    let snapshot = state();

    let result_view = match snapshot.estimate {
        Some(estimate) => {
            let headline = format_amount(estimate.prediction);
            rsx! {
                h3 { "The estimated car price is {headline}$" }
                BandPanels { estimate: estimate }
            }
        }
        None => rsx! {
            p { "Input information and click on Calculate to get an estimated price" }
        },
    };

    let error_view = snapshot.error.map(|message| {
        rsx! {
            p { style: "color: {palette.band_expensive};", "{message}" }
        }
    });

    rsx! {
        div { style: "{page_style}",
            h1 { "🍁 Used car price calculator" }
            PriceForm {}
            {result_view}
            {error_view}
        }
    }
}
