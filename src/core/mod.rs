pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Hero, SquadRecord};
pub use crate::domain::ports::{AssemblyConfig, OutputFormat, Pipeline, Storage};
pub use crate::utils::error::Result;
