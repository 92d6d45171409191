use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use pgn_reader::{BufferedReader, RawHeader, SanPlus, Skip, Visitor};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{HeatMapError, Result};

/// One recorded game: its mainline move notations in play order.
///
/// Immutable once loaded. Variations are dropped at load time, so the move
/// list is exactly the sequence of half-moves that were played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    moves: Vec<String>,
}

impl GameRecord {
    /// Build a record directly from notation strings.
    pub fn from_moves(moves: Vec<String>) -> Self {
        Self { moves }
    }

    /// The game's move notations in play order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }
}

/// Loader configuration.
///
/// Diagnostic verbosity is explicit here rather than ambient logger state:
/// parse diagnostics go through `log` at debug level and stay silent unless
/// the caller opted in.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Show an indicatif spinner while reading large files
    pub show_progress: bool,
    /// Emit a debug log line when trailing data cuts the read short
    pub log_malformed: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            log_malformed: true,
        }
    }
}

/// PGN visitor that collects each game's mainline SAN strings.
struct GameCollector {
    games: Vec<GameRecord>,
    current: Vec<String>,
}

impl GameCollector {
    fn new() -> Self {
        Self {
            games: Vec::new(),
            current: Vec::new(),
        }
    }
}

impl Visitor for GameCollector {
    type Result = ();

    fn begin_game(&mut self) {
        self.current.clear();
    }

    fn header(&mut self, _key: &[u8], _value: RawHeader<'_>) {}

    fn san(&mut self, san_plus: SanPlus) {
        // SanPlus renders with its check/mate suffix attached ("Qxe7+"),
        // which is the shape the extractor expects.
        self.current.push(san_plus.to_string());
    }

    fn begin_variation(&mut self) -> Skip {
        Skip(true) // Mainline only
    }

    fn end_game(&mut self) -> Self::Result {
        self.games.push(GameRecord {
            moves: std::mem::take(&mut self.current),
        });
    }
}

/// Read all games from a PGN file.
///
/// An unopenable file is fatal. Once reading has produced at least one game,
/// malformed trailing data simply ends iteration; no partial game is
/// returned.
pub fn load_games(path: &Path, config: &LoaderConfig) -> Result<Vec<GameRecord>> {
    let file = File::open(path)
        .map_err(|e| HeatMapError::IoError(format!("cannot open {}: {}", path.display(), e)))?;
    read_games_from(file, config)
}

/// Reader-generic core of [`load_games`], usable from an in-memory cursor.
pub fn read_games_from<R: Read>(input: R, config: &LoaderConfig) -> Result<Vec<GameRecord>> {
    let mut reader = BufferedReader::new(input);
    let mut collector = GameCollector::new();

    let progress = if config.show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} Loading games... {pos}")
        {
            pb.set_style(style);
        }
        Some(pb)
    } else {
        None
    };

    loop {
        match reader.read_game(&mut collector) {
            Ok(Some(())) => {
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }
            Ok(None) => break,
            Err(err) => {
                if collector.games.is_empty() {
                    // Nothing readable at all: fatal
                    return Err(err.into());
                }
                if config.log_malformed {
                    debug!("stopping at unreadable trailing data: {}", err);
                }
                break;
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    Ok(collector.games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet() -> LoaderConfig {
        LoaderConfig {
            show_progress: false,
            log_malformed: false,
        }
    }

    const TWO_GAMES: &str = "\
[Event \"First\"]
[Result \"1-0\"]

1. e4 e5 2. Nf3 Nc6 3. Bb5 1-0

[Event \"Second\"]
[Result \"0-1\"]

1. d4 Nf6 2. c4 e6 0-1
";

    #[test]
    fn test_reads_games_in_file_order() {
        let games = read_games_from(Cursor::new(TWO_GAMES), &quiet()).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(
            games[0].moves(),
            &["e4", "e5", "Nf3", "Nc6", "Bb5"]
        );
        assert_eq!(games[1].moves(), &["d4", "Nf6", "c4", "e6"]);
    }

    #[test]
    fn test_check_suffix_survives_loading() {
        let pgn = "1. e4 e5 2. Qh5 Nc6 3. Qxf7# 1-0\n";
        let games = read_games_from(Cursor::new(pgn), &quiet()).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].moves().last().unwrap(), "Qxf7#");
    }

    #[test]
    fn test_variations_are_skipped() {
        let pgn = "1. e4 e5 (1... c5 2. Nf3) 2. Nf3 Nc6 *\n";
        let games = read_games_from(Cursor::new(pgn), &quiet()).unwrap();
        assert_eq!(games[0].moves(), &["e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn test_empty_input_yields_no_games() {
        let games = read_games_from(Cursor::new(""), &quiet()).unwrap();
        assert!(games.is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_games(Path::new("definitely-not-here.pgn"), &quiet());
        assert!(matches!(err, Err(HeatMapError::IoError(_))));
    }
}
