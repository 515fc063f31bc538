use std::time::{Duration, Instant};

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::Board;
use crate::move_generation::count_positions;

/// Positions reached at one depth and how long counting them took.
#[derive(Debug, Clone, Copy)]
pub struct DepthCount {
    pub depth: u8,
    pub positions: usize,
    pub duration: Duration,
}

/// Counts the positions reachable from the starting layout of a
/// `dimension`-sized board, for every depth from 1 to `depth`.
pub fn count_positions_by_depth(depth: u8, dimension: usize) -> Result<Vec<DepthCount>, BoardError> {
    let board = Board::initial(dimension)?;

    Ok((1..=depth)
        .map(|depth| {
            let started = Instant::now();
            let positions = count_positions(&board, Color::White, depth);
            DepthCount {
                depth,
                positions,
                duration: started.elapsed(),
            }
        })
        .collect())
}

pub fn run_count_positions(depth: u8, dimension: usize) -> Result<(), BoardError> {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for count in count_positions_by_depth(depth, dimension)? {
        let positions_per_second = count.positions as f64 / count.duration.as_secs_f64();

        total_positions += count.positions;
        total_duration += count.duration;

        println!(
            "depth: {}, positions: {}, positions per second: {:.0}",
            count.depth, count.positions, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {:.0}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );

    Ok(())
}
