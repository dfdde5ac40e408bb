//! IPv4 addresses as big-endian `u32` values, e.g. for range checks or compact storage.

use std::net::Ipv4Addr;

use crate::error::{Error, Result};

/// `"a.b.c.d"` to `a << 24 | b << 16 | c << 8 | d`.
///
/// Surrounding whitespace is ignored. Each octet must be a decimal number in 0..=255 without
/// leading zeros.
pub fn ip2int(ip: &str) -> Result<u32> {
    let addr: Ipv4Addr = ip
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAddress(ip.to_string()))?;

    Ok(u32::from(addr))
}

/// Inverse of [`ip2int`].
pub fn int2ip(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_addresses() {
        assert_eq!(ip2int("0.0.0.0").unwrap(), 0);
        assert_eq!(ip2int("0.0.0.1").unwrap(), 1);
        assert_eq!(ip2int("1.0.0.0").unwrap(), 1 << 24);
        assert_eq!(ip2int("127.0.0.1").unwrap(), 2_130_706_433);
        assert_eq!(ip2int("192.168.1.10").unwrap(), 0xc0a8_010a);
        assert_eq!(ip2int("255.255.255.255").unwrap(), u32::MAX);
    }

    #[test]
    fn high_bit_is_unsigned() {
        assert_eq!(ip2int("128.0.0.0").unwrap(), 0x8000_0000);
        assert_eq!(int2ip(0x8000_0000), "128.0.0.0");
    }

    #[test]
    fn int_to_dotted() {
        assert_eq!(int2ip(0), "0.0.0.0");
        assert_eq!(int2ip(2_130_706_433), "127.0.0.1");
        assert_eq!(int2ip(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(ip2int(" 10.0.0.1\n").unwrap(), 0x0a00_0001);
    }

    #[test]
    fn rejects_invalid_addresses() {
        for ip in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "256.0.0.1",
            "1.2.3.-4",
            "a.b.c.d",
            "1..2.3",
            "::1",
            "010.0.0.1",
        ] {
            assert!(
                matches!(ip2int(ip), Err(Error::InvalidAddress(ref s)) if s == ip),
                "accepted {ip:?}"
            );
        }
    }

    #[test]
    fn every_octet_value_round_trips() {
        for octet in 0..=255u32 {
            for shift in [0, 8, 16, 24] {
                let value = octet << shift;
                assert_eq!(ip2int(&int2ip(value)).unwrap(), value);
            }
        }
    }

    #[test]
    fn sampled_integers_round_trip() {
        for _ in 0..10_000 {
            let value = fastrand::u32(..);
            assert_eq!(ip2int(&int2ip(value)).unwrap(), value);
        }
    }

    #[test]
    fn sampled_addresses_round_trip() {
        for _ in 0..10_000 {
            let ip = format!(
                "{}.{}.{}.{}",
                fastrand::u8(..),
                fastrand::u8(..),
                fastrand::u8(..),
                fastrand::u8(..)
            );
            assert_eq!(int2ip(ip2int(&ip).unwrap()), ip);
        }
    }
}
