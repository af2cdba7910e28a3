use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod errors;
pub mod handlers;
mod memory;
mod repo;
pub mod repo_types;
pub mod services;

pub use memory::MemoryProfileStore;
pub use repo::{PgProfileStore, ProfileStore};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::profile_routes())
}
