use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed edge record #{record}: {reason}")]
    MalformedInput { record: usize, reason: String },
    #[error("edge ({0}, {1}) not found in graph")]
    EdgeNotFound(usize, usize),
    #[error("node {0} not found in graph")]
    NodeNotFound(usize),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("failed to access file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to process csv data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to parse yaml data: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput { record, reason: reason.into() }
    }
}
