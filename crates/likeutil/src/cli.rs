#![doc(hidden)]

use likeutil_crypto::{PasswordCodec, create_hash, create_hmac};
use thiserror::Error;
use tracing::debug;

use crate::args::{Command, NowArgs};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Crypto(#[from] likeutil_crypto::Error),

    #[error("{0}")]
    Network(#[from] likeutil_network::Error),

    #[error("secret does not match the token")]
    Mismatch,
}

/// Execute `command` and return the text to print.
pub fn run(command: &Command) -> Result<String, CliError> {
    let output = match command {
        Command::Hash { secret, scrypt } => {
            let codec = PasswordCodec::new(scrypt.params())?;
            debug!("scrypt params {:?}", codec.params());
            codec.hash(secret)?
        }
        Command::Verify {
            secret,
            token,
            scrypt,
        } => {
            let codec = PasswordCodec::new(scrypt.params())?;
            if !codec.verify(secret, token)? {
                return Err(CliError::Mismatch);
            }
            "ok".to_string()
        }
        Command::Hex { len } => likeutil_crypto::random_hex(*len)?,
        Command::Float => likeutil_crypto::random_float()?.to_string(),
        Command::Int { min, max } => likeutil_crypto::random_int(*min, *max)?.to_string(),
        Command::Id => likeutil_crypto::random_id()?,
        Command::Alpha { len } => likeutil_crypto::random_alpha(*len)?,
        Command::String { alphabet, len } => likeutil_crypto::random_string(alphabet, *len)?,
        Command::Digest { algorithm, text } => create_hash(*algorithm, text),
        Command::Hmac {
            algorithm,
            key,
            text,
        } => create_hmac(*algorithm, text, key),
        Command::Ip2int { ip } => likeutil_network::ip2int(ip)?.to_string(),
        Command::Int2ip { value } => likeutil_network::int2ip(*value),
        Command::Now(now) => now_text(now),
    };

    Ok(output)
}

fn now_text(now: &NowArgs) -> String {
    if now.epoch {
        likeutil_date::seconds().to_string()
    } else if now.epoch_millis {
        likeutil_date::millis().to_string()
    } else {
        now.date_format().format_now()
    }
}
