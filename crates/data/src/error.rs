use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Test case has no description")]
    MissingDescription,
    #[error("Test case `{0}` has no function")]
    MissingFunction(String),
    #[error("Skip reason must not be empty")]
    EmptySkipReason,
    #[error("Line break in {field}: {value:?}")]
    MultilineField { field: &'static str, value: String },
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

pub type DataResult<T, E = Error> = Result<T, E>;
