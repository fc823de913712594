//! Core lemonade state machine.
//!
//! This module contains the pure part of the system:
//! - The four lifecycle stages
//! - Lemon size providers (the only source of randomness)
//! - The transition function over an owned [`Cycle`]
//! - The [`Lemonade`] machine tying a cycle to its provider
//!
//! Nothing here touches a view or a string table.

mod cycle;
mod machine;
mod stage;
mod tree;

pub use cycle::{Cycle, Step};
pub use machine::Lemonade;
pub use stage::Stage;
pub use tree::{LemonTree, SizeProvider, LEMON_SIZES, MAX_LEMON_SIZE, MIN_LEMON_SIZE};
