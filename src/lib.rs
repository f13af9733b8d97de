pub mod activity;
pub mod config;
pub mod dates;
pub mod errors;
pub mod logging;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod tracker;

pub use dates::DayKey;
pub use errors::{Result, TrackerError};
pub use state::{Action, AppState};
pub use storage::{Storage, load_state, resolve_data_dir, save_state};
pub use tracker::Tracker;
