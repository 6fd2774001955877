#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no interval in container")]
    EmptyContainer,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn incomparable() -> Self {
        Error::InvalidArgument("interval bounds cannot be compared".to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
