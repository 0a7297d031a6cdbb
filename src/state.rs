use crate::{api::SharedApi, config::Config};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub api: SharedApi,
    pub config: Config,
}

impl FromRef<AppState> for SharedApi {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
