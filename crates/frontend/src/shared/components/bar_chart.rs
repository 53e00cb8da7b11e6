//! Bar chart panel drawn by ECharts from the option built on the server.

use contracts::dashboards::d100_sales_dashboard::ChartSpec;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// ECharts instance bound to one element
    type ECharts;

    #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
    fn echarts_init(element: &web_sys::HtmlElement) -> Result<ECharts, JsValue>;

    #[wasm_bindgen(method, js_name = setOption)]
    fn set_option(this: &ECharts, option: &JsValue);

    #[wasm_bindgen(method)]
    fn dispose(this: &ECharts);
}

#[component]
pub fn BarChart(chart: ChartSpec) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let instance = StoredValue::new_local(None::<ECharts>);
    let empty = chart.is_empty();
    let title = chart.title.clone();
    let option = chart.option;

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        let parsed = match js_sys::JSON::parse(&option) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::error!("Invalid option for chart '{}': {:?}", title, e);
                return;
            }
        };
        match echarts_init(&element) {
            Ok(echarts) => {
                echarts.set_option(&parsed);
                instance.set_value(Some(echarts));
            }
            Err(e) => log::error!("ECharts is not loaded: {:?}", e),
        }
    });

    on_cleanup(move || {
        instance.try_update_value(|echarts| {
            if let Some(echarts) = echarts.take() {
                echarts.dispose();
            }
        });
    });

    view! {
        <div class="bar-chart">
            <div class="bar-chart__canvas" node_ref=container></div>
            {empty.then(|| view! { <div class="bar-chart__empty">"No data"</div> })}
        </div>
    }
}
