use crate::careers::catalog::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable reference data. Default: `Catalog::builtin()`.
    pub catalog: &'static Catalog,
}
