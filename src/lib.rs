pub mod app;
pub mod chart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod session;
pub mod state;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use metrics::compute_engagement_rate;
pub use state::AppState;
pub use store::RecordStore;
