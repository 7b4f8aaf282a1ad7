pub mod handlers;
pub mod request_id;
pub mod server;

/// Shared application state injected into all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Secret name applied when a request leaves the field empty.
    pub default_secret_name: String,
    /// Namespace applied when a request leaves the field empty.
    pub default_namespace: String,
}
