use std::fmt;

use crate::config::RulesConfig;
use crate::env::{Element, TerrainLookup};
use crate::state::{BoardError, PlayerIndex, UnitState};

/// Validated coordinate on the 3x3 board, row-major from the top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(usize, usize)", into = "(usize, usize)"))]
pub struct BoardPos {
    row: u8,
    col: u8,
}

impl BoardPos {
    pub const CENTER: Self = Self { row: 1, col: 1 };

    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= RulesConfig::BOARD_ROWS || col >= RulesConfig::BOARD_COLS {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Position for a row-major cell index (0..9).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= RulesConfig::BOARD_CELLS {
            return None;
        }
        Some(Self {
            row: (index / RulesConfig::BOARD_COLS) as u8,
            col: (index % RulesConfig::BOARD_COLS) as u8,
        })
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn index(self) -> usize {
        self.row() * RulesConfig::BOARD_COLS + self.col()
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = BoardPos> {
        (0..RulesConfig::BOARD_CELLS).filter_map(Self::from_index)
    }
}

impl TryFrom<(usize, usize)> for BoardPos {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<BoardPos> for (usize, usize) {
    fn from(pos: BoardPos) -> Self {
        (pos.row(), pos.col())
    }
}

impl fmt::Display for BoardPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single board cell: its terrain element and at most one unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub element: Element,
    pub unit: Option<UnitState>,
}

impl Cell {
    pub const fn new(element: Element) -> Self {
        Self {
            element,
            unit: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.unit.is_some()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(Element::Neutral)
    }
}

/// The shared 3x3 battlefield.
///
/// Only the orchestrator changes occupancy; rules components read it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Cell; RulesConfig::BOARD_CELLS],
}

impl Board {
    /// Empty board with neutral terrain everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board with the given element layout, indexed `[row][col]`.
    pub fn with_elements(
        layout: [[Element; RulesConfig::BOARD_COLS]; RulesConfig::BOARD_ROWS],
    ) -> Self {
        let mut board = Self::new();
        for pos in BoardPos::all() {
            board.cells[pos.index()].element = layout[pos.row()][pos.col()];
        }
        board
    }

    pub fn cell(&self, pos: BoardPos) -> &Cell {
        &self.cells[pos.index()]
    }

    pub fn cell_mut(&mut self, pos: BoardPos) -> &mut Cell {
        &mut self.cells[pos.index()]
    }

    /// All cells paired with their position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (BoardPos, &Cell)> {
        BoardPos::all().map(move |pos| (pos, self.cell(pos)))
    }

    pub fn element(&self, pos: BoardPos) -> Element {
        self.cell(pos).element
    }

    pub fn set_element(&mut self, pos: BoardPos, element: Element) {
        self.cell_mut(pos).element = element;
    }

    pub fn unit_at(&self, pos: BoardPos) -> Option<&UnitState> {
        self.cell(pos).unit.as_ref()
    }

    pub fn unit_at_mut(&mut self, pos: BoardPos) -> Option<&mut UnitState> {
        self.cell_mut(pos).unit.as_mut()
    }

    /// Places a unit on an empty cell.
    pub fn place(&mut self, pos: BoardPos, unit: UnitState) -> Result<(), BoardError> {
        let cell = self.cell_mut(pos);
        if cell.is_occupied() {
            return Err(BoardError::CellOccupied(pos));
        }
        cell.unit = Some(unit);
        Ok(())
    }

    /// Removes and returns the unit on a cell.
    pub fn remove(&mut self, pos: BoardPos) -> Result<UnitState, BoardError> {
        self.cell_mut(pos)
            .unit
            .take()
            .ok_or(BoardError::CellEmpty(pos))
    }

    /// Occupied cells with their units, row-major.
    pub fn units(&self) -> impl Iterator<Item = (BoardPos, &UnitState)> {
        self.cells()
            .filter_map(|(pos, cell)| cell.unit.as_ref().map(|unit| (pos, unit)))
    }

    /// Number of cells carrying `element`.
    pub fn count_elements(&self, element: Element) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.element == element)
            .count()
    }

    /// Number of units owned by `owner`.
    pub fn count_units_of(&self, owner: PlayerIndex) -> usize {
        self.units().filter(|(_, unit)| unit.owner == owner).count()
    }
}

impl TerrainLookup for Board {
    fn element_at(&self, pos: BoardPos) -> Option<Element> {
        Some(self.element(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Template;
    use crate::state::Direction;

    fn pos(row: usize, col: usize) -> BoardPos {
        BoardPos::new(row, col).unwrap()
    }

    fn unit(owner: u8) -> UnitState {
        let template = Template::new("EARTH_GOLEM", 5, 2);
        UnitState::spawn(&template, PlayerIndex(owner), Direction::N)
    }

    #[test]
    fn positions_are_validated() {
        assert!(BoardPos::new(2, 2).is_ok());
        assert_eq!(
            BoardPos::new(3, 0),
            Err(BoardError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(BoardPos::from_index(4), Some(BoardPos::CENTER));
        assert_eq!(BoardPos::from_index(9), None);
        assert_eq!(BoardPos::all().count(), 9);
        assert_eq!(pos(2, 1).index(), 7);
    }

    #[test]
    fn place_and_remove_enforce_occupancy() {
        let mut board = Board::new();
        board.place(pos(0, 0), unit(0)).unwrap();

        assert_eq!(
            board.place(pos(0, 0), unit(1)),
            Err(BoardError::CellOccupied(pos(0, 0)))
        );
        assert_eq!(board.remove(pos(0, 0)).unwrap().owner, PlayerIndex(0));
        assert_eq!(
            board.remove(pos(0, 0)),
            Err(BoardError::CellEmpty(pos(0, 0)))
        );
    }

    #[test]
    fn layout_and_counts() {
        use Element::*;
        let mut board = Board::with_elements([
            [Fire, Earth, Water],
            [Earth, Neutral, Earth],
            [Forest, Earth, Fire],
        ]);
        board.place(pos(0, 1), unit(0)).unwrap();
        board.place(pos(2, 2), unit(1)).unwrap();
        board.place(pos(1, 1), unit(1)).unwrap();

        assert_eq!(board.element(pos(2, 0)), Forest);
        assert_eq!(board.element_at(pos(0, 2)), Some(Water));
        assert_eq!(board.count_elements(Earth), 4);
        assert_eq!(board.count_elements(Mech), 0);
        assert_eq!(board.count_units_of(PlayerIndex(1)), 2);
        assert_eq!(
            board.units().map(|(p, _)| p).collect::<Vec<_>>(),
            vec![pos(0, 1), pos(1, 1), pos(2, 2)]
        );
    }
}
