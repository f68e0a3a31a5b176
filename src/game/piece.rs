use super::board::Cell;

/// The two sides of a game. The human always plays `Player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Player,
    Computer,
}

impl Piece {
    /// Get the opposing piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Player => Piece::Computer,
            Piece::Computer => Piece::Player,
        }
    }

    /// Convert piece to the cell value it occupies
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Player => Cell::Player,
            Piece::Computer => Cell::Computer,
        }
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Player => "Player",
            Piece::Computer => "Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::Player.other(), Piece::Computer);
        assert_eq!(Piece::Computer.other(), Piece::Player);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Piece::Player.to_cell(), Cell::Player);
        assert_eq!(Piece::Computer.to_cell(), Cell::Computer);
    }

    #[test]
    fn test_piece_name() {
        assert_eq!(Piece::Player.name(), "Player");
        assert_eq!(Piece::Computer.name(), "Computer");
    }
}
