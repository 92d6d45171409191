use crate::frequency::FrequencyTable;

/// An 8×8 count grid laid out like a printed board: row 0 is rank 8, row 7
/// is rank 1, column 0 is file `a`.
///
/// Squares are well formed by construction (`Square` is validating), so no
/// coordinate checking happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatGrid {
    cells: [[u32; 8]; 8],
}

impl HeatGrid {
    /// Map a frequency table onto the board. Unlisted squares stay 0.
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let mut cells = [[0u32; 8]; 8];

        for (square, count) in table.entries() {
            let row = (8 - square.rank()) as usize;
            let col = square.file_index();
            cells[row][col] = *count;
        }

        HeatGrid { cells }
    }

    /// Count at `[row][col]`, row 0 = rank 8, col 0 = file `a`.
    pub fn cell(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Rows from rank 8 down to rank 1.
    pub fn rows(&self) -> impl Iterator<Item = &[u32; 8]> {
        self.cells.iter()
    }

    /// Largest single cell count.
    pub fn max_count(&self) -> u32 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Sum of all cells. Equals the source table's total move count.
    pub fn total(&self) -> u32 {
        self.cells.iter().flat_map(|row| row.iter()).sum()
    }
}
