pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use error::{AppError, AppResult};
pub use response::ApiResponse;
pub use state::AppState;
pub use store::DataStore;
