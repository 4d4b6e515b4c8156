mod loader;

pub use loader::{Config, DesugaringConfig, DiscoveryConfig, ReportConfig};
