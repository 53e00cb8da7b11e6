pub mod components;
pub mod document;
