use thiserror::Error;

pub type Result<T> = std::result::Result<T, SurfaceError>;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Node '{0}' is already registered")]
    DuplicateNode(String),

    #[error("Node '{0}' is not registered")]
    UnknownNode(String),

    #[error("Palette serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
