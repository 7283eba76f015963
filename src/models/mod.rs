pub mod config;

pub use config::{AppConfig, Overrides, Settings};
