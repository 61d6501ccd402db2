use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid value for categorical field {0}: {1}")]
    InvalidCategory(String, String),
}
