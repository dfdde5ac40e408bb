#![doc(hidden)]

use clap::Parser;
use likeutil_crypto::HashAlgorithm;
use likeutil_crypto::password::PasswordParams;
use likeutil_date::{DateFormat, Locale};

/// Arguments for the likeutil CLI
#[derive(Parser, Debug)]
#[command(version = "2.0.0", about = "likeutil command line helpers")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[clap(
        short = 'v',
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Output details; specify multiple times for more detail"
    )]
    pub verbose: u8,

    #[clap(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Don't print any messages except for errors",
        default_value_t = false
    )]
    pub quiet: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Hash a secret into a salted scrypt token
    Hash {
        secret: String,
        #[command(flatten)]
        scrypt: ScryptArgs,
    },
    /// Check a secret against a token produced by 'hash'
    Verify {
        secret: String,
        token: String,
        #[command(flatten)]
        scrypt: ScryptArgs,
    },
    /// Random bytes as lowercase hex
    Hex {
        #[clap(default_value_t = 16, help = "Number of random bytes")]
        len: usize,
    },
    /// Random float in [0, 1)
    Float,
    /// Random integer in [min, max)
    Int {
        #[clap(allow_hyphen_values = true)]
        min: i64,
        #[clap(allow_hyphen_values = true)]
        max: i64,
    },
    /// 21 character URL-safe identifier
    Id,
    /// Random alphanumeric string
    Alpha {
        #[clap(default_value_t = 21)]
        len: usize,
    },
    /// Random string drawn from a custom alphabet
    String { alphabet: String, len: usize },
    /// Hex digest of a text
    Digest {
        #[clap(help = "sha1, sha224, sha256, sha384 or sha512")]
        algorithm: HashAlgorithm,
        text: String,
    },
    /// Hex HMAC of a text
    Hmac {
        #[clap(help = "sha1, sha224, sha256, sha384 or sha512")]
        algorithm: HashAlgorithm,
        key: String,
        text: String,
    },
    /// Dotted-quad IPv4 address to integer
    Ip2int { ip: String },
    /// Integer to dotted-quad IPv4 address
    Int2ip { value: u32 },
    /// Current time
    Now(NowArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hash { .. } => "hash",
            Command::Verify { .. } => "verify",
            Command::Hex { .. } => "hex",
            Command::Float => "float",
            Command::Int { .. } => "int",
            Command::Id => "id",
            Command::Alpha { .. } => "alpha",
            Command::String { .. } => "string",
            Command::Digest { .. } => "digest",
            Command::Hmac { .. } => "hmac",
            Command::Ip2int { .. } => "ip2int",
            Command::Int2ip { .. } => "int2ip",
            Command::Now(_) => "now",
        }
    }
}

/// scrypt cost parameters; tokens only verify with the parameters that produced them
#[derive(clap::Args, Debug, Clone)]
pub struct ScryptArgs {
    #[clap(
        long,
        value_name = "N",
        env = "LIKEUTIL_SCRYPT_LOG_N",
        default_value_t = PasswordParams::DEFAULT_LOG_N,
        help = "log2 of the scrypt CPU/memory cost"
    )]
    pub log_n: u8,

    #[clap(
        long,
        value_name = "N",
        env = "LIKEUTIL_SCRYPT_R",
        default_value_t = PasswordParams::DEFAULT_R,
        help = "scrypt block size"
    )]
    pub block_size: u32,

    #[clap(
        long,
        value_name = "N",
        env = "LIKEUTIL_SCRYPT_P",
        default_value_t = PasswordParams::DEFAULT_P,
        help = "scrypt parallelization"
    )]
    pub parallelism: u32,

    #[clap(
        long,
        value_name = "BYTES",
        env = "LIKEUTIL_SCRYPT_MAX_MEMORY",
        default_value_t = PasswordParams::DEFAULT_MAX_MEMORY,
        help = "Refuse parameters needing more working memory than this"
    )]
    pub max_memory: u64,
}

impl ScryptArgs {
    pub fn params(&self) -> PasswordParams {
        PasswordParams {
            log_n: self.log_n,
            r: self.block_size,
            p: self.parallelism,
            max_memory: self.max_memory,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct NowArgs {
    #[clap(
        short = 'l',
        long,
        env = "LIKEUTIL_LOCALE",
        default_value = "en-US",
        help = "en-US, en-GB, es, de or iso"
    )]
    pub locale: Locale,

    #[clap(long, help = "Use a 12-hour clock")]
    pub hour12: bool,

    #[clap(long, help = "Omit the time of day")]
    pub no_time: bool,

    #[clap(long, help = "Omit the year")]
    pub no_year: bool,

    #[clap(long, help = "Omit seconds")]
    pub no_second: bool,

    #[clap(long, help = "Include milliseconds")]
    pub millis: bool,

    #[clap(
        long,
        conflicts_with = "epoch_millis",
        help = "Print seconds since the UNIX epoch"
    )]
    pub epoch: bool,

    #[clap(long, help = "Print milliseconds since the UNIX epoch")]
    pub epoch_millis: bool,
}

impl NowArgs {
    pub fn date_format(&self) -> DateFormat {
        DateFormat {
            time: !self.no_time,
            locale: self.locale,
            hour12: self.hour12,
            year: !self.no_year,
            second: !self.no_second,
            millis: self.millis,
        }
    }
}
