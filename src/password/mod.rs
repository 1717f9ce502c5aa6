//! Master-passphrase strength rules and secure password generation.

use rand::seq::SliceRandom;
use rand::{Rng, TryRngCore};

/// Uppercase character class.
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase character class.
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Digit character class.
const DIGITS: &[u8] = b"0123456789";

/// Special character class.  The validator and the generator use the
/// same set, so a generated password always passes validation.
const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Default length for generated passwords.
pub const DEFAULT_LENGTH: usize = 16;

/// Result of a strength check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub is_strong: bool,
    pub message: &'static str,
}

impl Strength {
    fn weak(message: &'static str) -> Self {
        Self {
            is_strong: false,
            message,
        }
    }
}

/// Check a candidate passphrase against the strength rules.
///
/// Rules are checked in order and the first failure wins:
/// length ≥ 8, then at least one uppercase letter, lowercase letter,
/// digit, and special character.
pub fn validate_strength(candidate: &str) -> Strength {
    if candidate.chars().count() < 8 {
        return Strength::weak("must be at least 8 characters long");
    }
    if !candidate.bytes().any(|b| UPPERCASE.contains(&b)) {
        return Strength::weak("must contain at least one uppercase letter");
    }
    if !candidate.bytes().any(|b| LOWERCASE.contains(&b)) {
        return Strength::weak("must contain at least one lowercase letter");
    }
    if !candidate.bytes().any(|b| DIGITS.contains(&b)) {
        return Strength::weak("must contain at least one number");
    }
    if !candidate.bytes().any(|b| SPECIAL.contains(&b)) {
        return Strength::weak("must contain at least one special character");
    }

    Strength {
        is_strong: true,
        message: "passphrase is strong",
    }
}

/// Generate a random password of the given length.
///
/// Guarantees at least one character from each of the four classes;
/// the remaining positions are drawn uniformly from the union, and the
/// whole sequence is shuffled (Fisher–Yates) so the mandatory
/// characters are not predictably placed.  Every random choice uses
/// the OS CSPRNG.  Lengths below 4 are clamped to 4 so all four
/// classes fit.
pub fn generate(length: usize) -> String {
    let length = length.max(4);
    // Panics if the OS random source fails.
    let mut rng = rand::rngs::OsRng.unwrap_err();

    let mut password = Vec::with_capacity(length);
    password.push(pick(&mut rng, UPPERCASE));
    password.push(pick(&mut rng, LOWERCASE));
    password.push(pick(&mut rng, DIGITS));
    password.push(pick(&mut rng, SPECIAL));

    let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL].concat();
    while password.len() < length {
        password.push(pick(&mut rng, &all));
    }

    password.shuffle(&mut rng);

    // All classes are ASCII, so this cannot fail.
    String::from_utf8(password).unwrap_or_default()
}

/// One uniformly random byte from `set`.
fn pick<R: Rng>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.random_range(0..set.len())]
}
