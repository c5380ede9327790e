//! Web layer for the delay monitor.
//!
//! Provides JSON endpoints mirroring the CLI report plus a small HTML
//! delay board.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
