//! Orientation of the second local grid axis.

use serde::{Deserialize, Serialize};

/// Whether the crossline (second) axis runs with or against the rotated Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YFlip {
    /// Crossline axis follows the rotated Y axis (flag `1`).
    #[default]
    Normal,
    /// Crossline axis is mirrored (flag `-1`).
    Flipped,
}

impl YFlip {
    /// Returns the sign applied to crossline offsets (+1.0 or -1.0).
    pub const fn sign(self) -> f64 {
        match self {
            YFlip::Normal => 1.0,
            YFlip::Flipped => -1.0,
        }
    }

    /// Creates a flip from the integer flag used by most surface formats.
    ///
    /// Only `1` and `-1` are meaningful; anything else returns `None`.
    pub const fn from_sign(sign: i32) -> Option<YFlip> {
        match sign {
            1 => Some(YFlip::Normal),
            -1 => Some(YFlip::Flipped),
            _ => None,
        }
    }

    /// Returns the integer flag (1 or -1).
    pub const fn as_sign(self) -> i32 {
        match self {
            YFlip::Normal => 1,
            YFlip::Flipped => -1,
        }
    }
}
