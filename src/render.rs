use plotters::prelude::*;
use std::path::Path;

use crate::errors::{HeatMapError, Result};
use crate::grid::HeatGrid;
use crate::square::PieceKind;

const IMAGE_WIDTH: u32 = 720;
const IMAGE_HEIGHT: u32 = 600;
const BOARD_WIDTH: u32 = 580;
const LEGEND_STEPS: u32 = 64;

/// Jet colormap: dark blue through cyan and yellow to dark red.
fn jet(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let r = (1.5 - (4.0 * t - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * t - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * t - 1.0).abs()).clamp(0.0, 1.0);
    RGBColor((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Render one piece's grid as a PNG heat map.
///
/// Board squares are colored relative to the grid's maximum count, with
/// file letters along the x axis, ranks 8 down to 1 along the y axis, the
/// piece symbol as the title, and a color-intensity legend bar on the
/// right. Writes exactly one file, replacing any existing file at `path`.
pub fn render_heat_map(grid: &HeatGrid, piece: PieceKind, path: &Path) -> Result<()> {
    draw(grid, piece, path)
        .map_err(|e| HeatMapError::RenderError(format!("{}: {}", path.display(), e)))
}

fn draw(
    grid: &HeatGrid,
    piece: PieceKind,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let (board_area, legend_area) = root.split_horizontally(BOARD_WIDTH);

    // Scale against the hottest square; an all-zero grid still renders,
    // uniformly at the colormap floor.
    let max_count = grid.max_count().max(1) as f64;

    // y runs 8 down to 0 so row 0 (rank 8) sits at the top.
    let mut chart = ChartBuilder::on(&board_area)
        .caption(piece.symbol().to_string(), ("sans-serif", 40))
        .margin(10)
        .x_label_area_size(32)
        .y_label_area_size(32)
        .build_cartesian_2d(0i32..8i32, 8i32..0i32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(9)
        .y_labels(9)
        .x_label_offset(33)
        .y_label_offset(30)
        .x_label_formatter(&|x| {
            if (0..8).contains(x) {
                ((b'a' + *x as u8) as char).to_string()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|y| {
            if (0..8).contains(y) {
                (8 - y).to_string()
            } else {
                String::new()
            }
        })
        .label_style(("sans-serif", 18))
        .draw()?;

    chart.draw_series(grid.rows().zip(0i32..).flat_map(|(row, y)| {
        row.iter().zip(0i32..).map(move |(count, x)| {
            let intensity = *count as f64 / max_count;
            Rectangle::new([(x, y), (x + 1, y + 1)], jet(intensity).filled())
        })
    }))?;

    // Color-intensity legend: a vertical gradient bar with its own count
    // axis, drawn in the strip right of the board.
    let mut legend = ChartBuilder::on(&legend_area)
        .margin(20)
        .y_label_area_size(42)
        .build_cartesian_2d(0i32..1i32, 0f64..max_count)?;

    legend
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_labels(6)
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style(("sans-serif", 14))
        .draw()?;

    legend.draw_series((0..LEGEND_STEPS).map(|step| {
        let lo = max_count * step as f64 / LEGEND_STEPS as f64;
        let hi = max_count * (step + 1) as f64 / LEGEND_STEPS as f64;
        let color = jet(step as f64 / (LEGEND_STEPS - 1) as f64);
        Rectangle::new([(0, lo), (1, hi)], color.filled())
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_endpoints() {
        let cold = jet(0.0);
        let hot = jet(1.0);
        // Dark blue at the floor, dark red at the ceiling
        assert_eq!(cold.0, 0);
        assert!(cold.2 > 0);
        assert!(hot.0 > 0);
        assert_eq!(hot.2, 0);
    }

    #[test]
    fn test_jet_clamps_out_of_range() {
        let (lo, floor) = (jet(-1.0), jet(0.0));
        assert_eq!((lo.0, lo.1, lo.2), (floor.0, floor.1, floor.2));
        let (hi, ceil) = (jet(2.0), jet(1.0));
        assert_eq!((hi.0, hi.1, hi.2), (ceil.0, ceil.1, ceil.2));
    }

    #[test]
    fn test_jet_midpoint_is_green_heavy() {
        let mid = jet(0.5);
        assert!(mid.1 > mid.0);
        assert!(mid.1 > mid.2);
    }
}
