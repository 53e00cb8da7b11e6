use contracts::dashboards::d100_sales_dashboard::DashboardPage;

/// Latest composed page plus the error of the latest render, if it failed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    pub page: Option<DashboardPage>,
    pub error: Option<String>,
}

impl RenderState {
    /// Records a render result. A failure keeps the last good page on screen.
    pub fn apply(&mut self, result: Result<DashboardPage, String>) {
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}
