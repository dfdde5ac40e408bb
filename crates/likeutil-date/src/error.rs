use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("{0}")]
    Time(#[from] jiff::Error),
}
