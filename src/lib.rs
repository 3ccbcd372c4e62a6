pub mod api;
pub mod availability;
pub mod config;
pub mod editor;
pub mod error;
pub mod startup;
