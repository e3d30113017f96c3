use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComboError {
    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("No combination of menu items satisfies the limits")]
    Infeasible,

    #[error("Solver failure: {0}")]
    Solver(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ComboError>;
