use leptos::prelude::*;
use thaw::Card;

/// One KPI: a label over its formatted value
#[component]
pub fn KpiCard(
    /// Caption, e.g. "Total sales:"
    #[prop(into)]
    label: String,
    /// Ready-to-show value text
    #[prop(into)]
    display: String,
    /// Stagger delay for the appear animation
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <div class="d100-kpi">
            <Card attr:style=style>
                <h3 class="d100-kpi__label">{label}</h3>
                <h3 class="d100-kpi__value">{display}</h3>
            </Card>
        </div>
    }
}
