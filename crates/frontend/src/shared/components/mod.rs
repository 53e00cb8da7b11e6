pub mod bar_chart;
pub mod checkbox;
pub mod kpi_card;
pub mod multi_select;

pub use bar_chart::BarChart;
pub use checkbox::Checkbox;
pub use kpi_card::KpiCard;
pub use multi_select::MultiSelect;
