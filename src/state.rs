use crate::config::Config;
use axum::extract::FromRef;

/// Shared state. The service keeps no records, only its configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
