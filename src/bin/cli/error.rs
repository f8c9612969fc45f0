use psa_testgen_data::Error as DataError;
use psa_testgen_guards::Error as GuardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Guard(#[from] GuardError),
    #[error("An error occurred: {0}")]
    Other(String),
}

pub type CliResult<T, E = Error> = Result<T, E>;
