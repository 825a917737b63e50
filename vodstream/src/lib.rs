mod app_state;
mod config;
pub use app_state::*;
pub use config::*;
pub mod errors;
pub mod routes;
pub mod transfer;
