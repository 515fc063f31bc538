use super::color::Color;

/// The kind of a checker, independent of its color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Piece {
    Man,
    King,
}

/// The contents of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Cell {
    Empty,
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    pub fn new(piece: Piece, color: Color) -> Self {
        match (piece, color) {
            (Piece::Man, Color::White) => Cell::WhiteMan,
            (Piece::King, Color::White) => Cell::WhiteKing,
            (Piece::Man, Color::Black) => Cell::BlackMan,
            (Piece::King, Color::Black) => Cell::BlackKing,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::WhiteMan | Cell::WhiteKing => Some(Color::White),
            Cell::BlackMan | Cell::BlackKing => Some(Color::Black),
            Cell::Empty => None,
        }
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::WhiteMan | Cell::BlackMan => Some(Piece::Man),
            Cell::WhiteKing | Cell::BlackKing => Some(Piece::King),
            Cell::Empty => None,
        }
    }

    pub fn is_king(&self) -> bool {
        self.piece() == Some(Piece::King)
    }

    pub fn belongs_to(&self, color: Color) -> bool {
        self.color() == Some(color)
    }

    pub fn is_enemy_of(&self, color: Color) -> bool {
        self.color() == Some(color.opposite())
    }

    /// The crowned version of this cell. Kings and empty cells are unchanged.
    pub fn crowned(&self) -> Self {
        match self {
            Cell::WhiteMan => Cell::WhiteKing,
            Cell::BlackMan => Cell::BlackKing,
            other => *other,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::WhiteMan => 'w',
            Cell::WhiteKing => 'W',
            Cell::BlackMan => 'b',
            Cell::BlackKing => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::WhiteMan),
            'W' => Some(Cell::WhiteKing),
            'b' => Some(Cell::BlackMan),
            'B' => Some(Cell::BlackKing),
            _ => None,
        }
    }

    pub fn to_unicode_char(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::WhiteMan => '⛀',
            Cell::WhiteKing => '⛁',
            Cell::BlackMan => '⛂',
            Cell::BlackKing => '⛃',
        }
    }
}
