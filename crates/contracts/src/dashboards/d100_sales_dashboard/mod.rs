pub mod chart;
pub mod filter;
pub mod page;

pub use chart::*;
pub use filter::*;
pub use page::*;
