//! The lemonade state machine: a cycle plus the tree it picks lemons from.

use super::cycle::{Cycle, Step};
use super::stage::Stage;
use super::tree::{LemonTree, SizeProvider};
use crate::checkpoint::Snapshot;
use crate::display::Description;
use tracing::warn;

/// State machine driven by taps on the lemon image.
///
/// Owns its [`Cycle`] and the injected [`SizeProvider`]; the view layer holds
/// no copy of either.
///
/// # Example
///
/// ```rust
/// use lemonade::core::{Lemonade, Stage};
/// use lemonade::display::Label;
///
/// let mut machine = Lemonade::new(|| 2);
/// assert_eq!(machine.describe().label, Label::PickLemon);
///
/// machine.advance();
/// machine.advance();
/// assert_eq!(machine.describe().label, Label::SqueezeCount(1));
/// assert_eq!(machine.peek_squeeze_count(), Some(1));
///
/// machine.advance();
/// assert_eq!(machine.stage(), Stage::Drink);
/// assert_eq!(machine.peek_squeeze_count(), None);
/// ```
pub struct Lemonade<P: SizeProvider = LemonTree> {
    cycle: Cycle,
    tree: P,
}

impl Default for Lemonade<LemonTree> {
    fn default() -> Self {
        Self::new(LemonTree::new())
    }
}

impl<P: SizeProvider> Lemonade<P> {
    /// Machine at the start of a fresh cycle.
    pub fn new(tree: P) -> Self {
        Self::from_cycle(tree, Cycle::new())
    }

    /// Machine resuming an existing cycle.
    pub fn from_cycle(tree: P, cycle: Cycle) -> Self {
        Self { cycle, tree }
    }

    /// Machine resuming from a persisted snapshot.
    ///
    /// Never fails: a snapshot that names an unknown stage, or a squeeze that
    /// can never finish, restarts from a fresh cycle instead.
    pub fn restore(tree: P, snapshot: &Snapshot) -> Self {
        let cycle = snapshot.to_cycle().unwrap_or_else(|| {
            warn!(?snapshot, "Discarding unusable snapshot, starting a fresh cycle");
            Cycle::new()
        });
        Self::from_cycle(tree, cycle)
    }

    /// The tap action.
    pub fn advance(&mut self) -> Step {
        self.cycle.advance(&mut self.tree)
    }

    /// Display payload for the current stage.
    pub fn describe(&self) -> Description {
        self.cycle.describe()
    }

    /// Squeeze count for the long-press notice, `None` outside squeezing.
    pub fn peek_squeeze_count(&self) -> Option<u32> {
        self.cycle.peek_squeeze_count()
    }

    /// Externalize the cycle for the persist hook.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.cycle)
    }

    pub fn stage(&self) -> Stage {
        self.cycle.stage()
    }

    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    pub fn tree(&self) -> &P {
        &self.tree
    }
}
