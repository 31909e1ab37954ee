//! Sparse cell storage
//!
//! Only explicitly written cells are stored, using a row-based BTreeMap
//! structure so serialization can walk rows and columns in order.

use std::collections::BTreeMap;

use super::Cell;

/// Sparse row-major storage for worksheet cells
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, Cell>>`. BTreeMaps
/// give ordered iteration, which the writer relies on for row-major,
/// left-to-right emission.
#[derive(Debug, Default)]
pub struct CellTable {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u16, Cell>>,
}

impl CellTable {
    /// Create a new empty cell table
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell, overwriting any previous cell at the coordinate
    pub fn insert(&mut self, row: u32, col: u16, cell: Cell) {
        self.rows.entry(row).or_default().insert(col, cell);
    }

    /// Get a cell
    pub fn get(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Get the column map for a row, if the row has any cells
    pub fn row(&self, row: u32) -> Option<&BTreeMap<u16, Cell>> {
        self.rows.get(&row)
    }

    /// Check whether the table has no cells
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, cell)| (row, col, cell)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut table = CellTable::new();

        table.insert(
            0,
            0,
            Cell::Number {
                value: 42.0,
                style: None,
            },
        );
        assert!(matches!(
            table.get(0, 0),
            Some(Cell::Number { value, .. }) if *value == 42.0
        ));
        assert!(table.get(1, 1).is_none());
        assert_eq!(table.cell_count(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = CellTable::new();

        table.insert(
            3,
            2,
            Cell::Number {
                value: 1.0,
                style: None,
            },
        );
        table.insert(
            3,
            2,
            Cell::Number {
                value: 2.0,
                style: None,
            },
        );

        assert_eq!(table.cell_count(), 1);
        assert!(matches!(
            table.get(3, 2),
            Some(Cell::Number { value, .. }) if *value == 2.0
        ));
    }

    #[test]
    fn test_row_major_iteration() {
        let mut table = CellTable::new();

        table.insert(1, 0, Cell::Number { value: 3.0, style: None });
        table.insert(0, 1, Cell::Number { value: 2.0, style: None });
        table.insert(0, 0, Cell::Number { value: 1.0, style: None });

        let coords: Vec<(u32, u16)> = table.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_row_lookup() {
        let mut table = CellTable::new();
        assert!(table.row(5).is_none());

        table.insert(5, 7, Cell::Boolean { value: true, style: None });
        let row = table.row(5).unwrap();
        assert_eq!(row.len(), 1);
        assert!(row.contains_key(&7));
    }
}
