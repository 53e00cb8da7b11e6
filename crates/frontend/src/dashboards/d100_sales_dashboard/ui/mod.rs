mod dashboard;
mod state;

pub use dashboard::SalesDashboard;
