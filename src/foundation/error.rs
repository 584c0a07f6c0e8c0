pub type SubspectResult<T> = Result<T, SubspectError>;

#[derive(thiserror::Error, Debug)]
pub enum SubspectError {
    #[error("script error: {0}")]
    Script(String),

    #[error("raster error: {0}")]
    Raster(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SubspectError {
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
