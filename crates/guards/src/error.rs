use thiserror::Error;

use crate::Domain36;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to determine dependency symbol for {name} in {domain}")]
    UnknownSymbol { name: String, domain: Domain36 },
    #[error("Unable to determine the PSA_WANT_ symbol for {0}")]
    NotPsaSymbol(String),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

pub type GuardResult<T, E = Error> = Result<T, E>;
