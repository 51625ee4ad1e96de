pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use config::CliConfig;
pub use core::{engine::SquadEngine, pipeline::SquadPipeline};
pub use utils::error::{Result, SquadError};
