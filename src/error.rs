use thiserror::Error;

#[derive(Debug, Error)]
pub enum MixerError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Infeasible target: {field} resolves to {value:.2}")]
    InfeasibleTarget { field: String, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MixerError>;
