//! Internet value generators: emails, URLs and IP addresses.

use crate::generators::person::{generate_first_name, generate_last_name};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::net::{Ipv4Addr, Ipv6Addr};

const EMAIL_PROVIDERS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "example.com"];

const DOMAIN_WORDS: &[&str] = &[
    "amber", "brisk", "cobalt", "dapper", "ember", "frosty", "gentle", "harbor", "ivory",
    "jolly", "kindred", "lunar", "mellow", "nimble", "orchid", "prism", "quiet", "rustic",
    "silver", "tidy", "umber", "velvet", "willow", "zesty",
];

const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org", "io", "biz", "info"];

/// Generate an email address built from a random person name.
pub fn generate_email<R: Rng>(rng: &mut R) -> String {
    let first = generate_first_name(rng);
    let last = generate_last_name(rng);
    let provider = EMAIL_PROVIDERS.choose(rng).copied().unwrap_or("example.com");

    let local = match rng.random_range(0..3) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}{}", rng.random_range(1..100)),
        _ => format!("{first}{}", rng.random_range(1..1000)),
    };

    format!("{local}@{provider}")
}

/// Generate an `https://` URL on a random two-word domain.
pub fn generate_url<R: Rng>(rng: &mut R) -> String {
    let first = DOMAIN_WORDS.choose(rng).copied().unwrap_or("amber");
    let second = DOMAIN_WORDS.choose(rng).copied().unwrap_or("willow");
    let suffix = DOMAIN_SUFFIXES.choose(rng).copied().unwrap_or("com");
    format!("https://{first}-{second}.{suffix}/")
}

/// Generate an IPv4 or IPv6 address with equal probability.
pub fn generate_ip<R: Rng>(rng: &mut R) -> String {
    if rng.random_bool(0.5) {
        Ipv4Addr::from(rng.random::<u32>()).to_string()
    } else {
        Ipv6Addr::from(rng.random::<u128>()).to_string()
    }
}
