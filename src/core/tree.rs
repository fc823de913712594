//! Lemon size providers.
//!
//! The size of a picked lemon is the number of squeezes it takes to turn it
//! into lemonade. It is the only source of randomness in a session, so it is
//! injected as a capability rather than drawn from a global.

use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Smallest lemon a tree can produce.
pub const MIN_LEMON_SIZE: u32 = 2;

/// Largest lemon a tree can produce.
pub const MAX_LEMON_SIZE: u32 = 4;

/// Inclusive range of lemon sizes.
pub const LEMON_SIZES: RangeInclusive<u32> = MIN_LEMON_SIZE..=MAX_LEMON_SIZE;

/// Source of lemon sizes, consulted once at the start of every cycle.
///
/// Any `FnMut() -> u32` closure is a provider, which makes deterministic
/// stubs a one-liner in tests.
///
/// # Example
///
/// ```rust
/// use lemonade::core::SizeProvider;
///
/// let mut always_three = || 3_u32;
/// assert_eq!(always_three.pick(), 3);
/// ```
pub trait SizeProvider {
    /// Pick the size of the next lemon.
    fn pick(&mut self) -> u32;
}

impl<F> SizeProvider for F
where
    F: FnMut() -> u32,
{
    fn pick(&mut self) -> u32 {
        self()
    }
}

/// Random provider drawing uniformly from [`LEMON_SIZES`].
///
/// # Example
///
/// ```rust
/// use lemonade::core::{LemonTree, SizeProvider, LEMON_SIZES};
///
/// let mut tree = LemonTree::seeded(7);
/// let size = tree.pick();
/// assert!(LEMON_SIZES.contains(&size));
/// ```
#[derive(Clone, Debug)]
pub struct LemonTree<R = ThreadRng> {
    rng: R,
}

impl LemonTree<ThreadRng> {
    /// Tree backed by the thread-local generator.
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for LemonTree<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl LemonTree<StdRng> {
    /// Reproducible tree: the same seed yields the same sequence of lemons.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> LemonTree<R> {
    /// Tree backed by a caller supplied generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SizeProvider for LemonTree<R> {
    fn pick(&mut self) -> u32 {
        self.rng.gen_range(LEMON_SIZES)
    }
}
