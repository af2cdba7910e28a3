use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::list_occupations;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OccupationsResponse {
    pub items: &'static [&'static str],
}

pub fn occupation_routes() -> Router<AppState> {
    Router::new().route("/occupations", get(get_occupations))
}

pub async fn get_occupations() -> Json<OccupationsResponse> {
    Json(OccupationsResponse {
        items: list_occupations(),
    })
}
