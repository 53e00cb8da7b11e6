use std::sync::Arc;

use crate::dashboards::d100_sales_dashboard::service::SalesDashboard;

/// Dataset status, fixed at startup
#[derive(Debug)]
pub enum DashboardState {
    Ready(SalesDashboard),
    /// Load failed; the message is shown as a page-level error
    Failed(String),
}

/// Shared, read-only application state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardState>,
}

impl AppState {
    pub fn new(dashboard: DashboardState) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}
