use chess_heatmap::{aggregate, load_games, render_heat_map, HeatGrid, LoaderConfig, PieceKind};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Render per-piece board heat maps from a PGN game collection", long_about = None)]
struct Args {
    /// Path to the PGN file containing the recorded games
    pgn_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    println!("Chess Heat Map Generator");
    println!("========================");

    let config = LoaderConfig::default();
    let games = load_games(&args.pgn_file, &config)?;
    println!(
        "Loaded {} games from {}",
        games.len(),
        args.pgn_file.display()
    );
    println!();

    for piece in PieceKind::ALL {
        let table = aggregate(&games, piece);
        let grid = HeatGrid::from_frequencies(&table);

        let output = PathBuf::from(piece.file_name());
        render_heat_map(&grid, piece, &output)?;

        println!(
            "  • {}: {} moves across {} squares -> {}",
            piece.name(),
            table.total_moves(),
            table.len(),
            output.display()
        );
    }

    println!();
    println!("Done: 5 heat maps written");
    Ok(())
}
