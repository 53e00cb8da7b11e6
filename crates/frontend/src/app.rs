use crate::dashboards::d100_sales_dashboard::ui::SalesDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesDashboard />
    }
}
