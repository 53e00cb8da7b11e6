use contracts::dashboards::d100_sales_dashboard::{
    DashboardOptions, DashboardPage, FilterOptions, FilterSelection, PageConfig,
};

use super::composer::compose_page;
use super::error::LoadError;
use super::filter::{apply_filters, filter_options};
use super::loader::load_sales_table;
use super::table::SalesTable;
use crate::shared::config::{get_dataset_path, DatasetConfig};

/// Loaded table plus everything derived from it once per session
#[derive(Debug, Clone)]
pub struct SalesDashboard {
    page: PageConfig,
    table: SalesTable,
    options: FilterOptions,
}

impl SalesDashboard {
    pub fn new(page: PageConfig, table: SalesTable) -> Self {
        let options = filter_options(&table);
        Self {
            page,
            table,
            options,
        }
    }

    pub fn table(&self) -> &SalesTable {
        &self.table
    }

    /// Filter controls with every value selected
    pub fn options(&self) -> DashboardOptions {
        DashboardOptions {
            page: self.page.clone(),
            filters: self.options.clone(),
            default_selection: self.options.default_selection(),
            total_row_count: self.table.len(),
        }
    }

    /// One render cycle: filter the resident table, then compose the page
    pub fn render(&self, selection: &FilterSelection) -> DashboardPage {
        let filtered = apply_filters(&self.table, selection);
        compose_page(&self.page, &filtered, self.table.len())
    }
}

/// Load the dataset named in the configuration
pub fn load_dashboard(config: &DatasetConfig) -> Result<SalesDashboard, LoadError> {
    let path = get_dataset_path(config);
    tracing::info!(
        "D100 Dashboard: Loading sheet '{}' from {}",
        config.sheet,
        path.display()
    );

    let table = load_sales_table(&path, config)?;
    let dashboard = SalesDashboard::new(PageConfig::default(), table);

    tracing::info!(
        "D100 Dashboard: Loaded {} transactions ({} cities, {} customer types, {} genders)",
        dashboard.table.len(),
        dashboard.options.cities.len(),
        dashboard.options.customer_types.len(),
        dashboard.options.genders.len()
    );

    Ok(dashboard)
}
