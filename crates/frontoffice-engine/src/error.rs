use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Store error: {0}")]
    Store(#[from] frontoffice_store::StoreError),

    #[error("Evaluator error: {0}")]
    Evaluator(String),

    #[error("Roster service error: {0}")]
    Roster(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
