use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Energy group {index} does not exist in a structure of {count} group(s)")]
    UnknownGroup { index: usize, count: usize },
}
