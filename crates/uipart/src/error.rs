use thiserror::Error;

#[derive(Error, Debug)]
pub enum UipartError {
    #[error("duplicate specification name `{0}`")]
    DuplicateSpec(String),

    #[error("unknown component `{name}` referenced from {path}")]
    UnknownComponent { name: String, path: String },

    #[error("circular component reference: {path}")]
    CircularReference { path: String },

    #[error("invalid specification set:\n{0}")]
    Invalid(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, UipartError>;
