pub mod cities;
pub mod config;
pub mod error;
pub mod telemetry;
