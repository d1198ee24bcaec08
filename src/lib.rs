pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{gemini::GeminiClient, storage::LocalStorage};
pub use config::settings::Settings;
pub use core::{
    engine::TripEngine, extract::extract_structured, planner::Planner, route::build_route_url,
};
pub use utils::error::{PlannerError, Result};
