//! Shuffle strategies.
//!
//! A strategy produces a permutation of `0..len`; [`ShuffleStrategy::shuffle`]
//! applies it to a slice and returns a new vector, leaving the input untouched.

use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

pub trait ShuffleStrategy {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Returns a permutation of the indices `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;

    /// Returns a permuted copy of `items`.
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T>
    where
        Self: Sized,
    {
        self.permutation(items.len())
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }
}

impl<S: ShuffleStrategy + ?Sized> ShuffleStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (**self).permutation(len)
    }
}

impl<S: ShuffleStrategy + ?Sized> ShuffleStrategy for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (**self).permutation(len)
    }
}

/// Fisher–Yates over a ChaCha20 stream.
///
/// Every ordering of `n` items is equally likely. Seeded from the operating
/// system by default; [`SecureShuffle::with_seed`] gives a reproducible stream.
///
/// ```
/// use arcana_engine::shuffle::{SecureShuffle, ShuffleStrategy};
///
/// let mut a = SecureShuffle::with_seed(7);
/// let mut b = SecureShuffle::with_seed(7);
/// assert_eq!(a.shuffle(&[1, 2, 3, 4]), b.shuffle(&[1, 2, 3, 4]));
/// ```
#[derive(Debug, Clone)]
pub struct SecureShuffle {
    rng: ChaCha20Rng,
}

impl SecureShuffle {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SecureShuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShuffleStrategy for SecureShuffle {
    fn name(&self) -> &'static str {
        "secure"
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        for i in (1..len).rev() {
            let j = self.rng.random_range(0..=i);
            order.swap(i, j);
        }
        order
    }
}

/// Non-cryptographic shuffle for tests and throwaway sessions.
#[derive(Debug, Clone)]
pub struct SimpleShuffle {
    rng: SmallRng,
}

impl SimpleShuffle {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimpleShuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShuffleStrategy for SimpleShuffle {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// Configurable choice of shuffle strategy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleKind {
    #[default]
    Secure,
    Simple,
}

impl ShuffleKind {
    /// Builds the strategy, seeded when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Box<dyn ShuffleStrategy> {
        match (self, seed) {
            (ShuffleKind::Secure, Some(s)) => Box::new(SecureShuffle::with_seed(s)),
            (ShuffleKind::Secure, None) => Box::new(SecureShuffle::new()),
            (ShuffleKind::Simple, Some(s)) => Box::new(SimpleShuffle::with_seed(s)),
            (ShuffleKind::Simple, None) => Box::new(SimpleShuffle::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShuffleKind::Secure => "secure",
            ShuffleKind::Simple => "simple",
        }
    }
}

impl fmt::Display for ShuffleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShuffleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "secure" => Ok(ShuffleKind::Secure),
            "simple" => Ok(ShuffleKind::Simple),
            other => Err(format!("unknown shuffle strategy '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    #[test]
    fn permutation_covers_every_index() {
        let mut secure = SecureShuffle::with_seed(1);
        let mut simple = SimpleShuffle::with_seed(1);
        let identity: Vec<usize> = (0..78).collect();
        assert_eq!(sorted(secure.permutation(78)), identity);
        assert_eq!(sorted(simple.permutation(78)), identity);
    }

    #[test]
    fn empty_and_single_inputs_are_unchanged() {
        let mut s = SecureShuffle::with_seed(3);
        let empty: [u8; 0] = [];
        assert!(s.shuffle(&empty).is_empty());
        assert_eq!(s.shuffle(&["only"]), vec!["only"]);
    }

    #[test]
    fn boxed_strategy_shuffles() {
        let mut boxed = ShuffleKind::Simple.build(Some(9));
        assert_eq!(boxed.name(), "simple");
        let out = boxed.shuffle(&[1, 2, 3]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("SECURE".parse::<ShuffleKind>(), Ok(ShuffleKind::Secure));
        assert_eq!("simple".parse::<ShuffleKind>(), Ok(ShuffleKind::Simple));
        assert!("riffle".parse::<ShuffleKind>().is_err());
    }
}
