use std::io;

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("no digest algorithm selected")]
    NoAlgorithms,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
