/// Configuration file model.
pub mod config;
