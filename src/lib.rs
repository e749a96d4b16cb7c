pub mod application;
pub mod assets;
pub mod config;
pub mod error;
pub mod interaction;
pub mod models;
pub mod response;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod templates;
pub mod web_api;
pub mod web_app;

pub use state::AppState;
