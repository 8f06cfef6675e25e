//! Narration length classes.

use serde::{Deserialize, Serialize};

/// Target length of the generated narration script.
///
/// # Examples
///
/// ```
/// use reelsmith_core::ScriptLength;
/// use std::str::FromStr;
///
/// let length = ScriptLength::from_str("long").unwrap();
/// assert_eq!(length, ScriptLength::Long);
/// assert_eq!(length.target_words(), 600);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScriptLength {
    /// Roughly half a minute of narration
    Short,
    /// Roughly two minutes of narration
    #[default]
    Medium,
    /// Roughly four minutes of narration
    Long,
}

impl ScriptLength {
    /// Approximate word count requested from the script provider.
    pub fn target_words(&self) -> u32 {
        match self {
            ScriptLength::Short => 150,
            ScriptLength::Medium => 300,
            ScriptLength::Long => 600,
        }
    }

    /// Instruction fragment embedded in the generation prompt.
    pub fn directive(&self) -> String {
        format!("about {} words", self.target_words())
    }
}
