use serde::{Deserialize, Serialize};

use super::chart::ChartSpec;
use super::filter::{FilterOptions, FilterSelection};

/// Page width mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    Centered,
    Wide,
}

/// Page metadata: browser title, icon and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_title: String,
    pub page_icon: String,
    pub layout: PageLayout,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_title: "Sales Dashboard".to_string(),
            page_icon: "📊".to_string(),
            layout: PageLayout::Wide,
        }
    }
}

impl PageConfig {
    /// Heading shown at the top of the page
    pub fn heading(&self) -> String {
        format!("{} {}", self.page_icon, self.page_title)
    }
}

/// Scalar indicators computed from the filtered table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesKpis {
    /// Sum of total price, truncated to a whole currency amount
    pub total_sales: i64,
    /// Mean rating rounded to one decimal, `None` when no rows match
    pub average_rating: Option<f64>,
    /// Number of star glyphs shown next to the rating
    pub star_count: u32,
    /// Mean total price rounded to two decimals, `None` when no rows match
    pub average_sale: Option<f64>,
}

/// One labelled KPI panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiPanel {
    pub label: String,
    pub display: String,
}

/// Fully composed dashboard for one filter selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPage {
    pub heading: String,
    pub kpis: SalesKpis,
    /// Panels in left-to-right order
    pub kpi_panels: Vec<KpiPanel>,
    /// Chart shown in the left column
    pub left_chart: ChartSpec,
    /// Chart shown in the right column
    pub right_chart: ChartSpec,
    /// Rows matching the selection
    pub row_count: usize,
    /// Rows in the loaded table
    pub total_row_count: usize,
}

/// Everything the browser needs to build the filter controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub page: PageConfig,
    pub filters: FilterOptions,
    pub default_selection: FilterSelection,
    pub total_row_count: usize,
}
