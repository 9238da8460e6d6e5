use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
