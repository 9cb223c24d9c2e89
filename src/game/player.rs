use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// The two competitors of one game. Tokens are opaque to the engine: a
/// color, a name or a number all work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players<P> {
    first: P,
    second: P,
}

impl<P: Clone + PartialEq> Players<P> {
    /// Pair two tokens; `None` if they are equal
    pub fn new(first: P, second: P) -> Option<Self> {
        if first == second {
            return None;
        }
        Some(Players { first, second })
    }

    /// The player who moves first
    pub fn first(&self) -> &P {
        &self.first
    }

    pub fn second(&self) -> &P {
        &self.second
    }

    /// Get the other player
    pub fn other(&self, player: &P) -> &P {
        if *player == self.first {
            &self.second
        } else {
            &self.first
        }
    }
}

/// Piece color chosen by a human player in the terminal front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
    White,
    Rgb(u8, u8, u8),
}

impl PlayerColor {
    const NAMED: [(&'static str, PlayerColor); 7] = [
        ("red", PlayerColor::Red),
        ("yellow", PlayerColor::Yellow),
        ("blue", PlayerColor::Blue),
        ("green", PlayerColor::Green),
        ("magenta", PlayerColor::Magenta),
        ("cyan", PlayerColor::Cyan),
        ("white", PlayerColor::White),
    ];

    fn parse_hex(hex: &str) -> Option<PlayerColor> {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(PlayerColor::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl FromStr for PlayerColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| ColorError::Unknown(s.to_string()));
        }

        Self::NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, color)| color)
            .ok_or_else(|| ColorError::Unknown(s.to_string()))
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            named => {
                let name = Self::NAMED
                    .iter()
                    .find(|(_, color)| color == named)
                    .map_or("unknown", |(name, _)| *name);
                f.write_str(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_reject_duplicates() {
        assert!(Players::new("red", "red").is_none());
        assert!(Players::new(1, 2).is_some());
    }

    #[test]
    fn test_other_player() {
        let players = Players::new("red", "blue").unwrap();
        assert_eq!(*players.other(&"red"), "blue");
        assert_eq!(*players.other(&"blue"), "red");
        assert_eq!(*players.first(), "red");
        assert_eq!(*players.second(), "blue");
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!("red".parse::<PlayerColor>(), Ok(PlayerColor::Red));
        assert_eq!(" Yellow ".parse::<PlayerColor>(), Ok(PlayerColor::Yellow));
        assert_eq!("CYAN".parse::<PlayerColor>(), Ok(PlayerColor::Cyan));
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(
            "#FF8000".parse::<PlayerColor>(),
            Ok(PlayerColor::Rgb(0xff, 0x80, 0x00))
        );
        assert!("#ff80".parse::<PlayerColor>().is_err());
        assert!("#gg0000".parse::<PlayerColor>().is_err());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!("".parse::<PlayerColor>(), Err(ColorError::Empty));
        assert_eq!("   ".parse::<PlayerColor>(), Err(ColorError::Empty));
        assert_eq!(
            "chartreuse".parse::<PlayerColor>(),
            Err(ColorError::Unknown("chartreuse".to_string()))
        );
    }

    #[test]
    fn test_same_color_different_spelling_is_equal() {
        let a: PlayerColor = "Red".parse().unwrap();
        let b: PlayerColor = "red".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerColor::Magenta.to_string(), "magenta");
        assert_eq!(PlayerColor::Rgb(1, 2, 255).to_string(), "#0102ff");
    }
}
