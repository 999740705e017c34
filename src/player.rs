/// The two sides. Blue always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Player {
    Blue = 1,
    Red = -1,
}

impl Player {
    pub fn opposite(&self) -> Player {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    /// True for the side that opened the game.
    pub fn is_first(&self) -> bool {
        matches!(self, Player::Blue)
    }

    /// Glyph for a stone of this colour.
    pub fn to_char(&self) -> char {
        match self {
            Player::Blue => 'O',
            Player::Red => 'X',
        }
    }

    /// Glyph for a cell this side could still claim.
    pub fn to_potential_char(&self) -> char {
        match self {
            Player::Blue => 'o',
            Player::Red => 'x',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'O' | 'o' | 'B' | 'b' => Some(Player::Blue),
            'X' | 'x' | 'R' | 'r' => Some(Player::Red),
            _ => None,
        }
    }

    pub fn from_int(i: i8) -> Option<Player> {
        match i {
            1 => Some(Player::Blue),
            -1 => Some(Player::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let player_str = match self {
            Player::Blue => "Blue",
            Player::Red => "Red",
        };
        write!(f, "{}", player_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Player::Blue.opposite(), Player::Red);
        assert_eq!(Player::Red.opposite().opposite(), Player::Red);
        assert!(Player::Blue.is_first());
        assert!(!Player::Red.is_first());
    }

    #[test]
    fn test_chars() {
        assert_eq!(Player::from_char(Player::Blue.to_char()), Some(Player::Blue));
        assert_eq!(Player::from_char(Player::Red.to_potential_char()), Some(Player::Red));
        assert_eq!(Player::from_char('.'), None);
        assert_eq!(Player::from_int(Player::Red as i8), Some(Player::Red));
    }
}
