use super::state::RenderState;
use crate::dashboards::d100_sales_dashboard::api;
use crate::shared::components::{BarChart, KpiCard, MultiSelect};
use crate::shared::document::apply_page_config;
use contracts::dashboards::d100_sales_dashboard::{
    DashboardOptions, DashboardPage, FilterDimension, FilterSelection, PageLayout,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Sales dashboard: filter sidebar, KPI row and two bar charts
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let (options, set_options) = signal(None::<DashboardOptions>);
    let selection = RwSignal::new(None::<FilterSelection>);

    // Startup failure halts the page; render failures are shown inline
    let (load_error, set_load_error) = signal(None::<String>);
    let render_state = RwSignal::new(RenderState::default());
    let (loading, set_loading) = signal(true);
    let (retry, set_retry) = signal(0u32);

    // Only the latest render request may write the page
    let request_seq = StoredValue::new(0u64);

    // Load page metadata and filter options on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_options().await {
                Ok(opts) => {
                    apply_page_config(&opts.page);
                    log::info!("D100: {} rows available", opts.total_row_count);
                    selection.set(Some(opts.default_selection.clone()));
                    set_options.set(Some(opts));
                }
                Err(e) => {
                    log::error!("Failed to load D100 options: {}", e);
                    set_load_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    // Recompose the page whenever the selection changes or a retry is asked for
    Effect::new(move |_| {
        retry.track();
        let Some(current) = selection.get() else {
            return;
        };
        request_seq.update_value(|n| *n += 1);
        let seq = request_seq.get_value();
        set_loading.set(true);

        spawn_local(async move {
            let result = api::render_dashboard(&current).await;
            if request_seq.get_value() != seq {
                return;
            }
            if let Err(e) = &result {
                log::error!("Failed to render D100 dashboard: {}", e);
            }
            render_state.update(|state| state.apply(result));
            set_loading.set(false);
        });
    });

    let toggle = move |dimension: FilterDimension| {
        Callback::new(move |value: String| {
            selection.update(|s| {
                if let Some(current) = s {
                    *current = current.toggled(dimension, &value);
                }
            });
        })
    };

    let filter_column = move |dimension: FilterDimension, group: &'static str| {
        let opts = Signal::derive(move || {
            options
                .get()
                .map(|o| o.filters.values(dimension).to_vec())
                .unwrap_or_default()
        });
        let selected = Signal::derive(move || {
            selection
                .get()
                .map(|s| s.values(dimension).to_vec())
                .unwrap_or_default()
        });
        view! {
            <MultiSelect
                label=dimension.label()
                group=group
                options=opts
                selected=selected
                on_toggle=toggle(dimension)
            />
        }
    };

    let layout_class = move || {
        let wide = options
            .get()
            .map(|o| o.page.layout == PageLayout::Wide)
            .unwrap_or(true);
        if wide {
            "d100-dashboard d100-dashboard--wide"
        } else {
            "d100-dashboard d100-dashboard--centered"
        }
    };

    view! {
        <div id="d100_sales_dashboard--dashboard" class=layout_class>
            {move || {
                if let Some(err) = load_error.get() {
                    view! {
                        <div class="d100-error">
                            <strong>"⚠ Error: "</strong>
                            {err}
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <aside class="d100-sidebar">
                            <h2 class="d100-sidebar__title">"Please filter the data:"</h2>
                            {filter_column(FilterDimension::City, "city")}
                            {filter_column(FilterDimension::CustomerType, "customer_type")}
                            {filter_column(FilterDimension::Gender, "gender")}
                        </aside>
                        <main class="d100-main">
                            {move || {
                                render_state
                                    .with(|s| s.error.clone())
                                    .map(|err| {
                                        view! {
                                            <div class="d100-render-error">
                                                <span>{err}</span>
                                                <button
                                                    class="d100-render-error__retry"
                                                    on:click=move |_| set_retry.update(|n| *n += 1)
                                                >
                                                    "Retry"
                                                </button>
                                            </div>
                                        }
                                    })
                            }}
                            {move || {
                                match render_state.with(|s| s.page.clone()) {
                                    Some(p) => render_page(p, loading.get()).into_any(),
                                    None if loading.get() => view! {
                                        <div class="d100-loading">
                                            <Spinner />
                                        </div>
                                    }
                                    .into_any(),
                                    None => ().into_any(),
                                }
                            }}
                        </main>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn render_page(page: DashboardPage, loading: bool) -> impl IntoView {
    let rows = format!("{} of {} rows", page.row_count, page.total_row_count);

    let kpis = page
        .kpi_panels
        .into_iter()
        .enumerate()
        .map(|(i, panel)| {
            view! {
                <KpiCard label=panel.label display=panel.display delay_ms=(i as u32) * 60 />
            }
        })
        .collect_view();

    view! {
        <div class="d100-page">
            <div class="d100-page__header">
                <h1>{page.heading}</h1>
                <span class="d100-page__rows">{rows}</span>
                {loading.then(|| view! { <Spinner /> })}
            </div>
            <div class="d100-kpis">{kpis}</div>
            <hr class="d100-divider" />
            <div class="d100-charts">
                <div class="d100-charts__column">
                    <BarChart chart=page.left_chart />
                </div>
                <div class="d100-charts__column">
                    <BarChart chart=page.right_chart />
                </div>
            </div>
        </div>
    }
}
