
use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;
use crate::moves::Move;

pub type MoveList = Vec<Move>;

/// Diagonal directions, in the order they are scanned.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The two diagonals a man of `color` may move and capture along.
fn forward_directions(color: Color) -> [(isize, isize); 2] {
    let forward = color.forward();
    [(forward, -1), (forward, 1)]
}

/// Every legal move for `color`.
///
/// Capturing is mandatory: when any of `color`'s pieces can capture, only
/// the captures are returned, from whichever pieces have them. Chained
/// captures are not composed here; each hop is its own move, and the caller
/// checks `captures_from` on the landing square after playing one.
///
/// Moves are listed square by square in row-then-column order, then by
/// direction, then by distance.
pub fn legal_moves(board: &Board, color: Color) -> MoveList {
    let mut captures = MoveList::new();
    let mut slides = MoveList::new();

    for (square, _) in board.pieces(color) {
        generate_captures(&mut captures, board, square);
        if captures.is_empty() {
            generate_slides(&mut slides, board, square);
        }
    }

    if captures.is_empty() {
        slides
    } else {
        captures
    }
}

/// The captures available to the piece on `square`, ignoring whether other
/// pieces could capture too.
pub fn captures_from(board: &Board, square: Square) -> MoveList {
    let mut moves = MoveList::new();
    generate_captures(&mut moves, board, square);
    moves
}

/// The non-capturing moves available to the piece on `square`.
pub fn slides_from(board: &Board, square: Square) -> MoveList {
    let mut moves = MoveList::new();
    generate_slides(&mut moves, board, square);
    moves
}

pub fn has_capture(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(square, _)| !captures_from(board, square).is_empty())
}

/// Counts the leaf positions of the ply tree `depth` moves deep, with the
/// side to move alternating after every hop.
pub fn count_positions(board: &Board, color: Color, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, color);
    if depth == 1 {
        return moves.len();
    }

    moves
        .iter()
        .map(|next_move| count_positions(&next_move.apply(board), color.opposite(), depth - 1))
        .sum()
}

fn generate_captures(moves: &mut MoveList, board: &Board, square: Square) {
    let cell = board.get(square);
    let color = match cell.color() {
        Some(color) => color,
        None => return,
    };

    match cell.piece() {
        Some(Piece::Man) => {
            for direction in forward_directions(color) {
                generate_man_capture(moves, board, square, color, direction);
            }
        }
        Some(Piece::King) => {
            for direction in DIRECTIONS {
                generate_king_captures(moves, board, square, color, direction);
            }
        }
        None => {}
    }
}

/// A man captures by jumping an adjacent enemy onto the empty dark square
/// directly behind it.
fn generate_man_capture(
    moves: &mut MoveList,
    board: &Board,
    square: Square,
    color: Color,
    direction: (isize, isize),
) {
    let dimension = board.dimension();
    let (jumped, landing) = match (
        square.offset(direction, 1, dimension),
        square.offset(direction, 2, dimension),
    ) {
        (Some(jumped), Some(landing)) => (jumped, landing),
        _ => return,
    };

    if board.get(jumped).is_enemy_of(color) && is_open(board, landing) {
        moves.push(Move::new(square, landing));
    }
}

/// A king flies over any number of empty squares to the first piece on the
/// diagonal. If that piece is an enemy, every empty square after it, up to
/// the next piece or the edge, is a landing square.
fn generate_king_captures(
    moves: &mut MoveList,
    board: &Board,
    square: Square,
    color: Color,
    direction: (isize, isize),
) {
    let dimension = board.dimension();
    let mut distance = 1;

    let blocker = loop {
        match square.offset(direction, distance, dimension) {
            Some(target) if board.get(target).is_empty() => distance += 1,
            Some(target) => break target,
            None => return,
        }
    };

    if !board.get(blocker).is_enemy_of(color) {
        return;
    }

    distance += 1;
    while let Some(landing) = square.offset(direction, distance, dimension) {
        if !is_open(board, landing) {
            break;
        }
        moves.push(Move::new(square, landing));
        distance += 1;
    }
}

fn generate_slides(moves: &mut MoveList, board: &Board, square: Square) {
    let cell = board.get(square);
    let color = match cell.color() {
        Some(color) => color,
        None => return,
    };
    let dimension = board.dimension();

    match cell.piece() {
        Some(Piece::Man) => {
            for direction in forward_directions(color) {
                if let Some(target) = square.offset(direction, 1, dimension) {
                    if is_open(board, target) {
                        moves.push(Move::new(square, target));
                    }
                }
            }
        }
        Some(Piece::King) => {
            for direction in DIRECTIONS {
                let mut distance = 1;
                while let Some(target) = square.offset(direction, distance, dimension) {
                    if !is_open(board, target) {
                        break;
                    }
                    moves.push(Move::new(square, target));
                    distance += 1;
                }
            }
        }
        None => {}
    }
}

fn is_open(board: &Board, square: Square) -> bool {
    square.is_dark() && board.get(square).is_empty()
}
