pub mod api;
pub mod dashboards;
pub mod error;
pub mod telemetry;
