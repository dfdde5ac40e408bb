//! Public API behavior of password tokens and random helpers

use std::collections::HashSet;

use data_encoding::BASE64;
use likeutil_crypto::password::{CREDENTIAL_LEN, PasswordCodec, PasswordParams};
use likeutil_crypto::{Error, random_hex, random_int, random_string};

fn codec() -> PasswordCodec {
    PasswordCodec::new(PasswordParams {
        log_n: 8,
        ..PasswordParams::default()
    })
    .unwrap()
}

fn random_secret() -> String {
    let len = fastrand::usize(0..32);
    (0..len).map(|_| fastrand::alphanumeric()).collect()
}

#[test]
fn sampled_secrets_verify_against_their_own_hash() {
    let codec = codec();

    for _ in 0..16 {
        let secret = random_secret();
        let token = codec.hash(&secret).unwrap();

        assert_eq!(BASE64.decode(token.as_bytes()).unwrap().len(), CREDENTIAL_LEN);
        assert!(codec.verify(&secret, &token).unwrap(), "secret {secret:?}");
        assert_eq!(codec.rehash(&secret, &token).unwrap(), token);
    }
}

#[test]
fn distinct_secrets_do_not_cross_verify() {
    let codec = codec();

    for _ in 0..16 {
        let s1 = random_secret();
        let s2 = format!("{s1}!");
        let token = codec.hash(&s2).unwrap();

        assert!(!codec.verify(&s1, &token).unwrap());
    }
}

#[test]
fn unicode_secrets() {
    let codec = codec();
    let token = codec.hash("contraseña🔑").unwrap();

    assert!(codec.verify("contraseña🔑", &token).unwrap());
    assert!(!codec.verify("contrasena🔑", &token).unwrap());
}

#[test]
fn tokens_made_with_other_params_do_not_verify() {
    let token = codec().hash("secret").unwrap();
    let stronger = PasswordCodec::new(PasswordParams {
        log_n: 9,
        ..PasswordParams::default()
    })
    .unwrap();

    assert!(!stronger.verify("secret", &token).unwrap());
}

#[test]
fn malformed_tokens_are_reported() {
    let codec = codec();

    for token in ["", "AAAA", "%%%%", "QUJD"] {
        assert!(
            matches!(codec.verify("x", token), Err(Error::MalformedCredential(_))),
            "token {token:?}"
        );
    }
}

#[test]
fn helpers_produce_fresh_values() {
    let hex: HashSet<String> = (0..100).map(|_| random_hex(16).unwrap()).collect();
    assert_eq!(hex.len(), 100);

    let strings: HashSet<String> = (0..100)
        .map(|_| random_string("abcdef", 24).unwrap())
        .collect();
    assert_eq!(strings.len(), 100);
}

#[test]
fn random_int_sampled_ranges() {
    for _ in 0..100 {
        let min = fastrand::i64(-1_000_000..1_000_000);
        let max = min + fastrand::i64(1..1_000);

        let n = random_int(min, max).unwrap();
        assert!((min..max).contains(&n), "{n} not in [{min}, {max})");
    }
}
