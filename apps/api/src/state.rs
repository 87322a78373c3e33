use std::sync::Arc;

use crate::config::Config;
use crate::portfolio::PortfolioStore;
use crate::site::Clock;
use crate::templates::TemplateCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable record storage. Default: InMemoryPortfolioStore.
    pub store: Arc<dyn PortfolioStore>,
    pub catalog: Arc<TemplateCatalog>,
    /// Supplies the footer year and README date.
    pub clock: Arc<dyn Clock>,
}
