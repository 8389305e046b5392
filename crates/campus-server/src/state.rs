//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use campus_catalog::Catalog;

use crate::middleware::chain::ContextChain;
use crate::views::Views;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Course and faculty listings.
    pub(crate) catalog: Arc<dyn Catalog>,
    /// Template environment.
    pub(crate) views: Views,
    /// Steps that build the per-request context.
    pub(crate) chain: ContextChain,
    /// Hide error detail on error pages.
    pub(crate) production: bool,
    /// Static files directory.
    pub(crate) public_dir: PathBuf,
}
