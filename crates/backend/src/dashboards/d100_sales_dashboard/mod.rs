pub mod aggregate;
pub mod charts;
pub mod composer;
pub mod error;
pub mod filter;
pub mod loader;
pub mod schema;
pub mod service;
pub mod table;

pub use error::LoadError;
pub use table::{SalesTable, TransactionRecord};
