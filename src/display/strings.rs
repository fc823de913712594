//! User-visible text.

use super::Label;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder replaced by the squeeze count in [`Strings::squeeze_count`].
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Errors raised while loading a string table.
#[derive(Debug, Error)]
pub enum StringsError {
    /// The table was not valid JSON or had fields of the wrong type
    #[error("Failed to parse string table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Text for every label, plus the squeeze-count template shared by the
/// running label and the long-press notice.
///
/// Every field falls back to its English default when missing, so a partial
/// table only overrides what it names.
///
/// # Example
///
/// ```rust
/// use lemonade::display::{Label, Strings};
///
/// let strings = Strings::from_json(r#"{ "lemon_drink": "Cheers!" }"#).unwrap();
///
/// assert_eq!(strings.render(Label::DrinkLemonade), "Cheers!");
/// assert_eq!(strings.render(Label::PickLemon), "Click to select a lemon!");
/// assert_eq!(strings.render(Label::SqueezeCount(2)), "Squeeze count: 2, keep tapping!");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub lemon_select: String,
    pub lemon_squeeze: String,
    pub squeeze_count: String,
    pub lemon_drink: String,
    pub lemon_empty_glass: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            lemon_select: "Click to select a lemon!".to_string(),
            lemon_squeeze: "Click to juice the lemon!".to_string(),
            squeeze_count: "Squeeze count: {count}, keep tapping!".to_string(),
            lemon_drink: "Click to drink your lemonade!".to_string(),
            lemon_empty_glass: "Click to start again!".to_string(),
        }
    }
}

impl Strings {
    /// Load a (possibly partial) table from JSON.
    pub fn from_json(json: &str) -> Result<Self, StringsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Text for a label.
    pub fn render(&self, label: Label) -> String {
        match label {
            Label::PickLemon => self.lemon_select.clone(),
            Label::SqueezeLemon => self.lemon_squeeze.clone(),
            Label::SqueezeCount(count) => self.squeeze_notice(count),
            Label::DrinkLemonade => self.lemon_drink.clone(),
            Label::EmptyGlass => self.lemon_empty_glass.clone(),
        }
    }

    /// Squeeze-count template with the count filled in.
    pub fn squeeze_notice(&self, count: u32) -> String {
        self.squeeze_count.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}
