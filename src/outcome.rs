use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    BlueWin,
    RedWin,
    Draw,
}

impl GameOutcome {
    /// Outcome from final stone counts.
    pub fn from_counts(blue: u32, red: u32) -> Self {
        match blue.cmp(&red) {
            std::cmp::Ordering::Greater => GameOutcome::BlueWin,
            std::cmp::Ordering::Less => GameOutcome::RedWin,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    /// Outcome from a score differential seen by `perspective`.
    pub fn from_score(score: i32, perspective: Player) -> Self {
        let winner = match score.signum() {
            1 => perspective,
            -1 => perspective.opposite(),
            _ => return GameOutcome::Draw,
        };
        match winner {
            Player::Blue => GameOutcome::BlueWin,
            Player::Red => GameOutcome::RedWin,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::BlueWin => Some(Player::Blue),
            GameOutcome::RedWin => Some(Player::Red),
            GameOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::BlueWin => write!(f, "Blue wins"),
            GameOutcome::RedWin => write!(f, "Red wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts() {
        assert_eq!(GameOutcome::from_counts(3, 1), GameOutcome::BlueWin);
        assert_eq!(GameOutcome::from_counts(1, 3), GameOutcome::RedWin);
        assert!(GameOutcome::from_counts(2, 2).is_draw());
    }

    #[test]
    fn test_from_score() {
        assert_eq!(GameOutcome::from_score(2, Player::Red), GameOutcome::RedWin);
        assert_eq!(GameOutcome::from_score(-1, Player::Red), GameOutcome::BlueWin);
        assert_eq!(GameOutcome::from_score(0, Player::Blue).winner(), None);
    }
}
