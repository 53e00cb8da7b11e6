use contracts::dashboards::d100_sales_dashboard::PageConfig;

/// Sets the browser tab title from the page metadata
pub fn apply_page_config(page: &PageConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(&format!("{} {}", page.page_icon, page.page_title));
}
