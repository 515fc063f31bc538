use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;
use crate::moves::Move;
use crate::searcher::{SearchConfig, SearchStats};

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Color,
        last_move: Option<Move>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.write_board(board);

        self.buffer.push_str(&format!("Turn: {}\n", current_turn));

        if let Some(last_move) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", last_move));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        print!("{}", self.buffer);
    }

    fn write_board(&mut self, board: &Board) {
        let dimension = board.dimension();
        let header: String = (0..dimension)
            .map(|col| format!("  {} ", (b'a' + col as u8) as char))
            .collect();
        let rule = |left: &str, middle: &str, right: &str| {
            let segments = vec!["───"; dimension].join(middle);
            format!("   {}{}{}\n", left, segments, right)
        };

        self.buffer.push_str(&format!("   {}\n", header));
        self.buffer.push_str(&rule("┌", "┬", "┐"));

        for row in 0..dimension {
            self.buffer.push_str(&format!("{:>2} │", row + 1));
            for col in 0..dimension {
                let square = Square::new(row as u8, col as u8);
                let cell = board.get(square);
                let symbol = if !cell.is_empty() {
                    cell.to_unicode_char()
                } else if square.is_dark() {
                    '·'
                } else {
                    ' '
                };
                self.buffer.push_str(&format!(" {} │", symbol));
            }
            self.buffer.push_str(&format!(" {}\n", row + 1));

            if row + 1 < dimension {
                self.buffer.push_str(&rule("├", "┼", "┤"));
            } else {
                self.buffer.push_str(&rule("└", "┴", "┘"));
            }
        }

        self.buffer.push_str(&format!("   {}\n\n", header));
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

/// The stats panel shown under the board after a computer move.
pub fn stats_panel(stats: &SearchStats, config: &SearchConfig) -> String {
    let mut panel = String::new();
    let _ = writeln!(
        panel,
        "* Level: {} ({})",
        config.difficulty().current().name,
        config.algorithm()
    );
    let _ = writeln!(
        panel,
        "* Score: {}",
        stats.last_score.map_or("-".to_string(), |s| format!("{:.1}", s))
    );
    let _ = writeln!(
        panel,
        "* Positions searched: {} ({} cutoffs, depth {})",
        stats.positions_searched, stats.cutoffs, stats.depth
    );
    let _ = write!(
        panel,
        "* Move took: {}",
        stats
            .last_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    );
    if stats.injected_error {
        panel.push_str("\n* Deliberate mistake");
    }
    panel
}
