use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Garment size label. Declaration order is the chart order: XS < S < ... < XXL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeLabel {
    #[serde(rename = "XS")]
    Xs,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
}

impl SizeLabel {
    pub const ALL: [SizeLabel; 6] = [
        SizeLabel::Xs,
        SizeLabel::S,
        SizeLabel::M,
        SizeLabel::L,
        SizeLabel::Xl,
        SizeLabel::Xxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
        }
    }

    /// Zero-based position in the XS..XXL ladder.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Signed number of ladder steps from `self` to `other`.
    pub fn steps_to(self, other: SizeLabel) -> i32 {
        other.rank() as i32 - self.rank() as i32
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XS" => Ok(Self::Xs),
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::Xl),
            "XXL" | "2XL" => Ok(Self::Xxl),
            _ => Err(ValidationError::UnknownSize(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "size_test.rs"]
mod tests;
