pub mod app;
pub mod config;
pub mod doc;
pub mod error;
pub mod extract;
pub mod features;
pub mod state;
