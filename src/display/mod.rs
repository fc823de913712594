//! State-to-presentation mapping.
//!
//! A [`Description`] is what the view needs to draw one screen: which label to
//! show and which image to show it under. Labels are typed here and turned
//! into text by a [`Strings`] table, so the core never handles user-visible
//! wording directly.

mod strings;

pub use strings::{Strings, StringsError, COUNT_PLACEHOLDER};

use crate::core::Stage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed image assets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageKey {
    Tree,
    SqueezedLemon,
    GlassOfLemonade,
    EmptyGlass,
}

impl ImageKey {
    /// Asset key handed to the external resource lookup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::SqueezedLemon => "squeezed-lemon",
            Self::GlassOfLemonade => "glass-of-lemonade",
            Self::EmptyGlass => "empty-glass",
        }
    }

    /// Image shown for a stage.
    pub fn for_stage(stage: Stage) -> Self {
        match stage {
            Stage::Select => Self::Tree,
            Stage::Squeeze => Self::SqueezedLemon,
            Stage::Drink => Self::GlassOfLemonade,
            Stage::Restart => Self::EmptyGlass,
        }
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instruction shown under the image.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// "pick a lemon"
    PickLemon,
    /// "squeeze it", before the first squeeze
    SqueezeLemon,
    /// "squeeze it (count)", after at least one squeeze
    SqueezeCount(u32),
    /// "drink the lemonade"
    DrinkLemonade,
    /// "empty the glass"
    EmptyGlass,
}

impl Label {
    /// Label for a stage. `squeezes` only matters while squeezing, where it
    /// separates first-squeeze wording from the running count.
    pub fn for_stage(stage: Stage, squeezes: u32) -> Self {
        match stage {
            Stage::Select => Self::PickLemon,
            Stage::Squeeze if squeezes == 0 => Self::SqueezeLemon,
            Stage::Squeeze => Self::SqueezeCount(squeezes),
            Stage::Drink => Self::DrinkLemonade,
            Stage::Restart => Self::EmptyGlass,
        }
    }
}

/// Display payload for the current stage.
///
/// # Example
///
/// ```rust
/// use lemonade::core::Stage;
/// use lemonade::display::{Description, ImageKey, Label};
///
/// let description = Description::of(Stage::Squeeze, 2);
/// assert_eq!(description.label, Label::SqueezeCount(2));
/// assert_eq!(description.image, ImageKey::SqueezedLemon);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Description {
    pub label: Label,
    pub image: ImageKey,
}

impl Description {
    /// Exhaustive mapping from stage (and squeeze count) to presentation.
    pub fn of(stage: Stage, squeezes: u32) -> Self {
        Self {
            label: Label::for_stage(stage, squeezes),
            image: ImageKey::for_stage(stage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_table_matches_stages() {
        let table = [
            (Stage::Select, 0, Label::PickLemon, ImageKey::Tree),
            (Stage::Squeeze, 0, Label::SqueezeLemon, ImageKey::SqueezedLemon),
            (Stage::Squeeze, 3, Label::SqueezeCount(3), ImageKey::SqueezedLemon),
            (Stage::Drink, 0, Label::DrinkLemonade, ImageKey::GlassOfLemonade),
            (Stage::Restart, 0, Label::EmptyGlass, ImageKey::EmptyGlass),
        ];

        for (stage, squeezes, label, image) in table {
            assert_eq!(
                Description::of(stage, squeezes),
                Description { label, image },
                "{stage} with {squeezes} squeezes"
            );
        }
    }

    #[test]
    fn squeeze_count_is_ignored_outside_squeeze() {
        assert_eq!(Label::for_stage(Stage::Drink, 4), Label::DrinkLemonade);
        assert_eq!(Label::for_stage(Stage::Select, 9), Label::PickLemon);
    }

    #[test]
    fn image_keys_have_asset_names() {
        assert_eq!(ImageKey::Tree.as_str(), "tree");
        assert_eq!(ImageKey::SqueezedLemon.as_str(), "squeezed-lemon");
        assert_eq!(ImageKey::GlassOfLemonade.as_str(), "glass-of-lemonade");
        assert_eq!(ImageKey::EmptyGlass.to_string(), "empty-glass");
    }

    #[test]
    fn image_key_serializes_as_asset_name() {
        let json = serde_json::to_string(&ImageKey::GlassOfLemonade).unwrap();
        assert_eq!(json, "\"glass-of-lemonade\"");
    }
}
