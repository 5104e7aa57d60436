use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the three fixed panel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Slot {
    One,
    Two,
    Three,
}

impl Slot {
    /// All slots in display order.
    pub const ALL: [Slot; 3] = [Slot::One, Slot::Two, Slot::Three];

    /// 1-based panel number, as shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// 0-based position for indexing per-slot arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Parse a 1-based panel number.
    pub fn from_number(n: u8) -> crate::Result<Self> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(CoreError::InvalidSlot(n)),
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = CoreError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n)
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.number()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
