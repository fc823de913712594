//! The four lifecycle stages of a lemonade cycle.
//!
//! Stages are plain values; all methods are pure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the lemon in its select → squeeze → drink → restart ring.
///
/// There is no terminal stage: `Restart` leads back to `Select` and the
/// cycle repeats for as long as the session lives.
///
/// # Example
///
/// ```rust
/// use lemonade::core::Stage;
///
/// assert_eq!(Stage::default(), Stage::Select);
/// assert_eq!(Stage::Select.tag(), "select");
/// assert_eq!(Stage::from_tag("drink"), Some(Stage::Drink));
/// assert_eq!(Stage::from_tag("juggle"), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// A lemon is waiting to be picked from the tree.
    #[default]
    Select,
    /// The picked lemon is being squeezed.
    Squeeze,
    /// The glass is full.
    Drink,
    /// The glass is empty.
    Restart,
}

impl Stage {
    /// Every stage, in ring order.
    pub const ALL: [Stage; 4] = [Stage::Select, Stage::Squeeze, Stage::Drink, Stage::Restart];

    /// Human readable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Squeeze => "Squeeze",
            Self::Drink => "Drink",
            Self::Restart => "Restart",
        }
    }

    /// Tag used by the persist hook.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Squeeze => "squeeze",
            Self::Drink => "drink",
            Self::Restart => "restart",
        }
    }

    /// Parse a persisted tag. Unknown tags yield `None`; callers decide how
    /// to fail closed.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.tag() == tag)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
