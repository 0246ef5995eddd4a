pub mod app;
pub mod calendar;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod remote;
pub mod session;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use controller::GoalSession;
pub use state::AppState;
