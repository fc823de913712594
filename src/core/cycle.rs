//! The lemonade transition function.

use super::stage::Stage;
use super::tree::SizeProvider;
use crate::display::Description;
use tracing::debug;

/// A transition taken by [`Cycle::advance`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub from: Stage,
    pub to: Stage,
}

impl Step {
    /// True when the tap moved the lemon to a different stage.
    pub fn changed_stage(&self) -> bool {
        self.from != self.to
    }
}

/// Owned state of one select → squeeze → drink → restart loop.
///
/// `remaining_squeezes` is only meaningful while squeezing and is `None`
/// elsewhere. `squeeze_count` is reset to zero when a lemon is picked and keeps
/// its last value after the lemon is used up.
///
/// # Example
///
/// ```rust
/// use lemonade::core::{Cycle, Stage};
///
/// let mut cycle = Cycle::new();
/// let mut tree = || 2;
///
/// cycle.advance(&mut tree);
/// assert_eq!(cycle.stage(), Stage::Squeeze);
/// assert_eq!(cycle.remaining_squeezes(), Some(2));
///
/// cycle.advance(&mut tree);
/// cycle.advance(&mut tree);
/// assert_eq!(cycle.stage(), Stage::Drink);
/// assert_eq!(cycle.squeeze_count(), Some(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cycle {
    stage: Stage,
    remaining_squeezes: Option<u32>,
    squeeze_count: Option<u32>,
}

impl Cycle {
    /// Fresh cycle: a lemon waiting on the tree, no counters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cycle from its parts.
    ///
    /// Returns `None` when the parts describe a squeeze that can never finish:
    /// no lemon left to squeeze, or no squeeze count.
    pub fn from_parts(
        stage: Stage,
        remaining_squeezes: Option<u32>,
        squeeze_count: Option<u32>,
    ) -> Option<Self> {
        if stage == Stage::Squeeze
            && (remaining_squeezes.unwrap_or(0) == 0 || squeeze_count.is_none())
        {
            return None;
        }

        Some(Self {
            stage,
            remaining_squeezes,
            squeeze_count,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn remaining_squeezes(&self) -> Option<u32> {
        self.remaining_squeezes
    }

    pub fn squeeze_count(&self) -> Option<u32> {
        self.squeeze_count
    }

    /// React to a tap on the image.
    ///
    /// Picking a lemon is the only point where `tree` is consulted.
    ///
    /// # Panics
    ///
    /// Panics when squeezing without a lemon left to squeeze. Neither the
    /// transition function nor [`Cycle::from_parts`] can produce that state, so
    /// reaching it is a bug in the caller's provider (a zero-sized lemon).
    pub fn advance<P>(&mut self, tree: &mut P) -> Step
    where
        P: SizeProvider + ?Sized,
    {
        let from = self.stage;

        match self.stage {
            Stage::Select => {
                let size = tree.pick();
                debug!(size, "Picked a lemon");
                self.remaining_squeezes = Some(size);
                self.squeeze_count = Some(0);
                self.stage = Stage::Squeeze;
            }
            Stage::Squeeze => {
                let remaining = self.remaining_squeezes.unwrap_or(0);
                assert!(
                    remaining > 0,
                    "squeezing with no lemon left (remaining: {:?})",
                    self.remaining_squeezes
                );

                let count = self.squeeze_count.unwrap_or(0) + 1;
                let remaining = remaining - 1;
                self.squeeze_count = Some(count);
                debug!(count, remaining, "Squeezed the lemon");

                if remaining == 0 {
                    self.remaining_squeezes = None;
                    self.stage = Stage::Drink;
                } else {
                    self.remaining_squeezes = Some(remaining);
                }
            }
            Stage::Drink => self.stage = Stage::Restart,
            Stage::Restart => self.stage = Stage::Select,
        }

        let step = Step {
            from,
            to: self.stage,
        };
        if step.changed_stage() {
            debug!(from = %step.from, to = %step.to, "Transitioned");
        }
        step
    }

    /// Display payload for the current stage. Pure.
    pub fn describe(&self) -> Description {
        Description::of(self.stage, self.squeeze_count.unwrap_or(0))
    }

    /// Squeeze count for the long-press notice.
    ///
    /// `None` outside the squeeze stage, where the counter is stale and must
    /// not be shown.
    pub fn peek_squeeze_count(&self) -> Option<u32> {
        match self.stage {
            Stage::Squeeze => self.squeeze_count,
            Stage::Select | Stage::Drink | Stage::Restart => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{ImageKey, Label};

    fn squeezing(size: u32) -> Cycle {
        let mut cycle = Cycle::new();
        cycle.advance(&mut || size);
        cycle
    }

    #[test]
    fn new_cycle_starts_on_the_tree() {
        let cycle = Cycle::new();
        assert_eq!(cycle.stage(), Stage::Select);
        assert_eq!(cycle.remaining_squeezes(), None);
        assert_eq!(cycle.squeeze_count(), None);
    }

    #[test]
    fn picking_a_lemon_starts_squeezing() {
        let cycle = squeezing(4);
        assert_eq!(cycle.stage(), Stage::Squeeze);
        assert_eq!(cycle.remaining_squeezes(), Some(4));
        assert_eq!(cycle.squeeze_count(), Some(0));
    }

    #[test]
    fn squeezing_a_lemon_of_three() {
        let mut cycle = squeezing(3);
        let mut tree = || -> u32 { panic!("tree consulted while squeezing") };
        assert_eq!(cycle.describe().label, Label::SqueezeLemon);

        let step = cycle.advance(&mut tree);
        assert!(!step.changed_stage());
        assert_eq!(cycle.squeeze_count(), Some(1));
        assert_eq!(cycle.remaining_squeezes(), Some(2));

        cycle.advance(&mut tree);
        assert_eq!(cycle.stage(), Stage::Squeeze);
        assert_eq!(cycle.squeeze_count(), Some(2));
        assert_eq!(cycle.remaining_squeezes(), Some(1));

        let step = cycle.advance(&mut tree);
        assert_eq!(
            step,
            Step {
                from: Stage::Squeeze,
                to: Stage::Drink
            }
        );
        assert_eq!(cycle.squeeze_count(), Some(3));
        assert_eq!(cycle.remaining_squeezes(), None);
    }

    #[test]
    fn drink_and_restart_leave_counters_alone() {
        let mut cycle = Cycle::from_parts(Stage::Drink, None, Some(2)).unwrap();
        let mut tree = || -> u32 { panic!("tree consulted after squeezing") };

        cycle.advance(&mut tree);
        assert_eq!(cycle.stage(), Stage::Restart);
        assert_eq!(cycle.remaining_squeezes(), None);
        assert_eq!(cycle.squeeze_count(), Some(2));

        cycle.advance(&mut tree);
        assert_eq!(cycle.stage(), Stage::Select);
        assert_eq!(cycle.squeeze_count(), Some(2));
    }

    #[test]
    fn picking_again_resets_the_count() {
        let mut cycle = Cycle::from_parts(Stage::Select, None, Some(4)).unwrap();
        cycle.advance(&mut || 2);

        assert_eq!(cycle.squeeze_count(), Some(0));
        assert_eq!(cycle.remaining_squeezes(), Some(2));
    }

    #[test]
    fn describe_follows_the_stage() {
        let mut cycle = Cycle::new();
        let mut tree = || 2;
        let mut images = vec![cycle.describe().image];
        for _ in 0..4 {
            cycle.advance(&mut tree);
            images.push(cycle.describe().image);
        }

        assert_eq!(
            images,
            vec![
                ImageKey::Tree,
                ImageKey::SqueezedLemon,
                ImageKey::SqueezedLemon,
                ImageKey::GlassOfLemonade,
                ImageKey::EmptyGlass,
            ]
        );
    }

    #[test]
    fn describe_counts_squeezes_after_the_first() {
        let mut cycle = squeezing(3);
        cycle.advance(&mut || 3);
        assert_eq!(cycle.describe().label, Label::SqueezeCount(1));
    }

    #[test]
    fn describe_is_idempotent() {
        let cycle = squeezing(2);
        assert_eq!(cycle.describe(), cycle.describe());
    }

    #[test]
    fn peek_only_answers_while_squeezing() {
        assert_eq!(Cycle::new().peek_squeeze_count(), None);
        assert_eq!(squeezing(2).peek_squeeze_count(), Some(0));

        let stale = Cycle::from_parts(Stage::Drink, None, Some(3)).unwrap();
        assert_eq!(stale.peek_squeeze_count(), None);
    }

    #[test]
    fn peek_does_not_change_the_cycle() {
        let cycle = squeezing(3);
        let before = cycle;
        let _ = cycle.peek_squeeze_count();
        assert_eq!(cycle, before);
    }

    #[test]
    fn from_parts_rejects_unfinishable_squeezes() {
        assert!(Cycle::from_parts(Stage::Squeeze, None, Some(0)).is_none());
        assert!(Cycle::from_parts(Stage::Squeeze, Some(0), Some(1)).is_none());
        assert!(Cycle::from_parts(Stage::Squeeze, Some(2), None).is_none());
        assert!(Cycle::from_parts(Stage::Squeeze, Some(2), Some(1)).is_some());
    }

    #[test]
    #[should_panic(expected = "squeezing with no lemon left")]
    fn zero_sized_lemon_is_a_bug() {
        let mut cycle = squeezing(0);
        cycle.advance(&mut || 0);
    }
}
