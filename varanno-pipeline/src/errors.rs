use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("result fragment must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
