use crate::validation::ValidationError;
use serde_json::Error as SerdeJsonError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid data: {0}")]
    InvalidData(#[from] ValidationError),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

pub mod file;

pub use file::{load_scenario_from_json, load_scenario_from_str, save_scenario_to_json};
