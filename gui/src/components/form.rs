// The eight-field input form.
//
// Every field carries a default, so a submission always produces a complete
// draft; the engine still owns the final say on completeness and ranges.
// Submission is one synchronous call into the engine handle; the result (or
// the error text) lands in the shared session state.

#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::services::EngineHandle;
use crate::state::app_state::AppState;
use shared::models::Make;

#[component]
pub fn PriceForm() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let engine = use_context::<EngineHandle>();
    let catalog = engine.catalog.clone();
    let snapshot = state();

    let submit_engine = engine.clone();

    rsx! {
        div {
            class: "price-form",
            style: "display: flex; gap: 24px; flex-wrap: wrap; align-items: flex-start;",

            div {
                label { "Miles" }
                input {
                    r#type: "number",
                    min: "0",
                    step: "0.1",
                    value: "{snapshot.miles}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<f64>() {
                            state.write().miles = v;
                        }
                    }
                }
                label { "Model" }
                select {
                    oninput: move |evt| state.write().model = evt.value(),
                    for model in catalog.models.iter() {
                        option { value: "{model}", selected: *model == snapshot.model, "{model}" }
                    }
                }
            }

            div {
                label { "Year" }
                input {
                    r#type: "number",
                    min: "1886",
                    step: "1",
                    value: "{snapshot.year}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<i32>() {
                            state.write().year = v;
                        }
                    }
                }
                label { "Engine size (L)" }
                input {
                    r#type: "number",
                    min: "0.9",
                    step: "0.1",
                    value: "{snapshot.engine_size}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<f64>() {
                            state.write().engine_size = v;
                        }
                    }
                }
            }

            div {
                label { "Make" }
                select {
                    oninput: move |evt| {
                        if let Some(make) = Make::parse(&evt.value()) {
                            state.write().make = make;
                        }
                    },
                    for make in catalog.makes.iter() {
                        option { value: "{make}", selected: *make == snapshot.make, "{make}" }
                    }
                }
                label { "Province" }
                select {
                    oninput: move |evt| state.write().province = evt.value(),
                    for province in catalog.provinces.iter() {
                        option {
                            value: "{province}",
                            selected: *province == snapshot.province,
                            "{province}"
                        }
                    }
                }
            }

            div {
                label { "Trim" }
                select {
                    oninput: move |evt| state.write().trim = evt.value(),
                    for trim in catalog.trims.iter() {
                        option { value: "{trim}", selected: *trim == snapshot.trim, "{trim}" }
                    }
                }
                label { "Body type" }
                select {
                    oninput: move |evt| state.write().body_type = evt.value(),
                    for body_type in catalog.body_types.iter() {
                        option {
                            value: "{body_type}",
                            selected: *body_type == snapshot.body_type,
                            "{body_type}"
                        }
                    }
                }
            }

            div {
                button {
                    onclick: move |_| {
                        let draft = state.read().to_draft();
                        match submit_engine.estimate(draft) {
                            Ok(estimate) => state.write().apply_estimate(estimate),
                            Err(message) => state.write().apply_error(message),
                        }
                    },
                    "Calculate"
                }
            }
        }
    }
}
