use crate::errors::{HeatMapError, Result};
use crate::loader::GameRecord;
use crate::square::{PieceKind, Square};

/// Parse the destination square from a SAN move notation.
///
/// Trailing grammar, applied to the end of the notation:
///
/// ```text
/// annotation := '+' | '#' | ε
/// square     := file rank        file ∈ a..h, rank ∈ 1..8
/// ```
///
/// Exactly one annotation character is stripped when present, never more,
/// and the two characters before it must form the square. Disambiguation
/// prefixes ("Nbd2", "R1e2") and capture markers ("Qxe7") sit ahead of the
/// destination and fall out naturally.
pub fn destination_square(notation: &str) -> Result<Square> {
    let bare = notation
        .strip_suffix(['+', '#'])
        .unwrap_or(notation);

    let mut trailing = bare.chars().rev();
    let rank = trailing.next();
    let file = trailing.next();

    match (file, rank) {
        (Some(file), Some(rank)) => Square::from_chars(file, rank)
            .ok_or_else(|| HeatMapError::MalformedNotation(notation.to_string())),
        _ => Err(HeatMapError::MalformedNotation(notation.to_string())),
    }
}

/// Destination squares of every move a piece type made in one game.
///
/// Lazy and restartable: each call walks the game's move list from the
/// start. Moves are matched on their leading SAN symbol, so castling
/// ("O-O") and pawn moves never match any `PieceKind`. A game with no
/// moves by the piece yields an empty sequence.
pub fn piece_destinations<'a>(
    game: &'a GameRecord,
    piece: PieceKind,
) -> impl Iterator<Item = Result<Square>> + 'a {
    let symbol = piece.symbol();
    game.moves()
        .iter()
        .filter(move |notation| notation.starts_with(symbol))
        .map(|notation| destination_square(notation))
}
