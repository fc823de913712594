//! Lemonade: a tap-driven state machine for a single-view lemonade toy.
//!
//! The user picks a lemon from a tree, squeezes it a random number of times,
//! drinks the lemonade and empties the glass, then starts over. The crate
//! follows a "pure core, imperative shell" split: the core decides what
//! happens on every tap, the shell hands the result to a host view.
//!
//! # Core Concepts
//!
//! - **Stage**: Select, Squeeze, Drink or Restart, in a ring with no end
//! - **Cycle**: the owned stage and squeeze counters, mutated only by `advance`
//! - **SizeProvider**: injected source of lemon sizes in [2, 4]
//! - **Description**: label and image key derived from the current stage
//! - **Snapshot**: the three primitive fields used to suspend and restore
//!
//! # Example
//!
//! ```rust
//! use lemonade::core::{Lemonade, Stage};
//! use lemonade::display::{ImageKey, Label};
//!
//! let mut machine = Lemonade::new(|| 3);
//!
//! machine.advance();
//! assert_eq!(machine.describe().label, Label::SqueezeLemon);
//!
//! for _ in 0..3 {
//!     machine.advance();
//! }
//! assert_eq!(machine.stage(), Stage::Drink);
//! assert_eq!(machine.describe().image, ImageKey::GlassOfLemonade);
//!
//! let snapshot = machine.snapshot();
//! assert_eq!(snapshot.lemonade_state, "drink");
//! assert_eq!(snapshot.squeeze_count, 3);
//! ```

pub mod checkpoint;
pub mod core;
pub mod display;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Cycle, LemonTree, Lemonade, SizeProvider, Stage, Step};
pub use checkpoint::{Checkpoint, CheckpointError, Snapshot};
pub use display::{Description, ImageKey, Label, Strings};
pub use session::{Frame, Session, View};
