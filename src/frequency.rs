use log::debug;

use crate::extractor::piece_destinations;
use crate::loader::GameRecord;
use crate::square::{PieceKind, Square};

/// Occurrence counts per destination square, sorted by count descending.
///
/// Tie order is first-encountered order across the game list, so the table
/// is deterministic for a given game list and piece.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(Square, u32)>,
}

impl FrequencyTable {
    /// The `(square, count)` pairs, highest count first.
    pub fn entries(&self) -> &[(Square, u32)] {
        &self.entries
    }

    /// Number of distinct squares recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts: the total number of extracted moves.
    pub fn total_moves(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    fn record(&mut self, square: Square) {
        match self.entries.iter_mut().find(|(sq, _)| *sq == square) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((square, 1)),
        }
    }
}

/// Count destination squares for one piece type across all games.
///
/// A game whose extraction fails contributes no squares at all; its partial
/// results are discarded and processing continues with the next game.
pub fn aggregate(games: &[GameRecord], piece: PieceKind) -> FrequencyTable {
    let mut table = FrequencyTable::default();

    for (index, game) in games.iter().enumerate() {
        match piece_destinations(game, piece).collect::<crate::errors::Result<Vec<Square>>>() {
            Ok(squares) => {
                for square in squares {
                    table.record(square);
                }
            }
            Err(err) => {
                debug!("skipping game {} for {}: {}", index, piece.name(), err);
            }
        }
    }

    // Stable sort keeps first-encountered order within equal counts
    table.entries.sort_by(|a, b| b.1.cmp(&a.1));
    table
}
