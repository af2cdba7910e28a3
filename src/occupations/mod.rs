use crate::state::AppState;
use axum::Router;

pub mod handlers;

/// Values offered by the form's occupation picker, in display order.
pub const OCCUPATIONS: [&str; 5] = [
    "Developer",
    "Tester",
    "System Analyst",
    "Project Manager",
    "Support",
];

pub fn list_occupations() -> &'static [&'static str] {
    &OCCUPATIONS
}

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::occupation_routes())
}
