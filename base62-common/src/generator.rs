use std::cell::RefCell;

use rand::{distributions::Distribution, rngs::SmallRng, Rng, SeedableRng};

/// Characters sampled from, in index order: digits, lowercase, uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uniform distribution over the characters of [`ALPHABET`].
///
/// Works like `rand::distributions::Alphanumeric`, but keeps the Base62
/// ordering of the alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Base62;

impl Distribution<char> for Base62 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())])
    }
}

thread_local! {
    // Not a CSPRNG: generated values are identifiers, not secrets.
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// Run `f` with the random source of the current thread.
pub fn with_rng<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
    RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// Generate a random Base62 string of `length` characters.
///
/// A length of zero gives the empty string.
pub fn generate(length: usize) -> String {
    with_rng(|rng| generate_with(rng, length))
}

/// Generate a random Base62 string of `length` characters from `rng`
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Base62).take(length).collect()
}
