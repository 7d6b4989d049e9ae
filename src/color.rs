use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The side a player plays in one game. `First` moves first (white).
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Color {
    #[default]
    First,
    Second,
}

impl Color {
    /// How a game played with this color moves the color balance.
    #[must_use]
    pub fn balance_delta(self) -> i32 {
        match self {
            Self::First => 1,
            Self::Second => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::First => write!(f, "white"),
            Color::Second => write!(f, "black"),
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        let string = string.to_lowercase();

        match string.as_str() {
            "w" | "white" | "first" => Ok(Self::First),
            "b" | "black" | "second" => Ok(Self::Second),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a Color!"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_move_the_balance() -> anyhow::Result<()> {
        assert_eq!(Color::from_str("White")?.balance_delta(), 1);
        assert_eq!(Color::from_str("b")?.balance_delta(), -1);
        assert_eq!(Color::default(), Color::First);
        assert!(Color::from_str("red").is_err());

        Ok(())
    }
}
