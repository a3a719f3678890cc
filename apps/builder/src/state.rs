use crate::config::Config;
use crate::session::SessionHandle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the task that owns the résumé document and submission status.
    pub session: SessionHandle,
    pub config: Config,
}
