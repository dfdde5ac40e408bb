use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not a dotted-quad IPv4 address: '{0}'")]
    InvalidAddress(String),

    #[error("request failed: {0}")]
    RequestFailed(String),
}
