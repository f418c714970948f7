use axum::{extract::State, response::Html, routing::get, Router};
use flare_tvl_core::refresh::DashboardState;
use flare_tvl_core::FlareTvlDashboard;
use std::sync::Arc;
use tokio::sync::watch;

pub struct AppState {
    pub dashboard: FlareTvlDashboard,
    pub state: watch::Receiver<DashboardState>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(state)
}

async fn index(State(app): State<Arc<AppState>>) -> Html<String> {
    let current = app.state.borrow().clone();
    Html(app.dashboard.render(&current))
}
