//! Person name generators.

use rand::seq::IndexedRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Alice", "Amara", "Bruno", "Camila", "Chen", "Dario", "Elena", "Farah",
    "Grace", "Hiro", "Ines", "Jonas", "Kai", "Lena", "Marcus", "Nadia", "Omar", "Priya",
    "Quinn", "Rafael", "Sofia", "Tomas", "Uma", "Victor", "Wen", "Yara", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Becker", "Costa", "Diaz", "Eriksen", "Fischer", "Garcia", "Hopper", "Ito",
    "Johnson", "Kowalski", "Lovelace", "Martins", "Nakamura", "Okafor", "Patel", "Quintero",
    "Rossi", "Silva", "Turing", "Ueda", "Vargas", "Weber", "Xu", "Yilmaz", "Zimmerman",
];

pub fn generate_first_name<R: Rng>(rng: &mut R) -> &'static str {
    FIRST_NAMES.choose(rng).copied().unwrap_or("Ada")
}

pub fn generate_last_name<R: Rng>(rng: &mut R) -> &'static str {
    LAST_NAMES.choose(rng).copied().unwrap_or("Lovelace")
}

/// Generate a "First Last" name.
pub fn generate_full_name<R: Rng>(rng: &mut R) -> String {
    let first = generate_first_name(rng);
    let last = generate_last_name(rng);
    format!("{first} {last}")
}
