//! Web layer for the railway operations API.
//!
//! Provides read-only JSON endpoints over the loaded dataset.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, ENDPOINTS, create_router};
pub use state::AppState;
