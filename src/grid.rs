//! Rectangular grids of cells with precomputed 4-neighbourhoods, stored in a
//! [grid_util::SimpleGrid].
//!
//! Coordinates follow [grid_util]: [Direction::NORTH] is `+y`. Text is read and printed with
//! `y = 0` on the first line, so north points one line further down the page.
use core::fmt;
use grid_util::grid::{Grid as ValueGrid, SimpleGrid};
use smallvec::SmallVec;
use thiserror::Error;

pub use grid_util::{Direction, Point};

/// The four orthogonal directions in [grid_util]'s clockwise order. Neighbours are always
/// visited in this order.
pub const CARDINALS: [Direction; 4] = [
    Direction::NORTH,
    Direction::EAST,
    Direction::SOUTH,
    Direction::WEST,
];

/// Slot of `dir` in [CARDINALS], [None] for diagonals and [Direction::NONE].
fn cardinal_slot(dir: Direction) -> Option<usize> {
    (dir != Direction::NONE && !dir.diagonal()).then(|| dir.num() as usize / 2)
}

/// Row-major index of `p` in `grid`, [None] if it lies outside.
pub(crate) fn cell_index<T: Copy>(grid: &impl ValueGrid<T>, p: Point) -> Option<usize> {
    grid.point_in_bounds(p).then(|| grid.get_ix_point(&p))
}

/// Position of the cell with row-major `index` in `grid`, [None] past the last cell.
pub(crate) fn cell_point<T: Copy>(grid: &impl ValueGrid<T>, index: usize) -> Option<Point> {
    (index < grid.width() * grid.height()).then(|| index_point(grid.width(), index))
}

fn index_point(width: usize, index: usize) -> Point {
    Point::new((index % width) as i32, (index / width) as i32)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Row-major grid of values. The in-bounds neighbours of every cell are computed once at
/// construction, so lookups during graph building are plain index reads.
#[derive(Clone, Debug)]
pub struct Grid<T: Copy> {
    cells: SimpleGrid<T>,
    neighbours: Vec<[Option<usize>; 4]>,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: usize, height: usize, value: T) -> Grid<T> {
        Grid::from_cells(SimpleGrid::new(width, height, value))
    }

    fn from_cells(cells: SimpleGrid<T>) -> Grid<T> {
        let neighbours = (0..cells.values.len())
            .filter_map(|index| cell_point(&cells, index))
            .map(|p| CARDINALS.map(|dir| cell_index(&cells, p + dir)))
            .collect();
        Grid { cells, neighbours }
    }

    /// Builds a grid from equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Grid<T>, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }
        let height = rows.len();
        Ok(Grid::from_cells(SimpleGrid {
            width,
            height,
            values: rows.into_iter().flatten().collect(),
        }))
    }

    /// Parses one row per line, mapping every character through `f`. Lines are taken as they
    /// are: trailing spaces are cells, and a blank line is a row without cells.
    pub fn parse<F>(input: &str, mut f: F) -> Result<Grid<T>, GridError>
    where
        F: FnMut(char) -> T,
    {
        let rows = input
            .lines()
            .map(|line| line.chars().map(&mut f).collect::<Vec<T>>())
            .collect::<Vec<_>>();
        Grid::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn len(&self) -> usize {
        self.cells.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.values.is_empty()
    }

    pub fn point_in_bounds(&self, p: Point) -> bool {
        self.cells.point_in_bounds(p)
    }

    pub fn index_of(&self, p: Point) -> Option<usize> {
        cell_index(&self.cells, p)
    }

    pub fn point_of(&self, index: usize) -> Option<Point> {
        cell_point(&self.cells, index)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.get_point(Point::new(x, y))
    }

    pub fn get_point(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|ix| &self.cells.values[ix])
    }

    /// Overwrites the value at `p`, returning [false] if `p` is out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        if !self.point_in_bounds(p) {
            return false;
        }
        self.cells.set_point(p, value);
        true
    }

    /// Index of the neighbour of cell `index` in direction `dir`. Absent at the border and for
    /// directions outside [CARDINALS].
    pub fn neighbour(&self, index: usize, dir: Direction) -> Option<usize> {
        let slot = cardinal_slot(dir)?;
        self.neighbours.get(index).and_then(|n| n[slot])
    }

    pub fn cell(&self, p: Point) -> Option<GridCell<'_, T>> {
        self.index_of(p).map(|index| GridCell { grid: self, index })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell<'_, T>> + '_ {
        (0..self.len()).map(move |index| GridCell { grid: self, index })
    }

    /// Positions of every cell whose value satisfies `pred`.
    pub fn find_all<F>(&self, mut pred: F) -> Vec<Point>
    where
        F: FnMut(&T) -> bool,
    {
        self.cells()
            .filter(|cell| pred(cell.value()))
            .map(|cell| cell.point())
            .collect()
    }
}

/// A cell of a [Grid]: its position, its value and access to its orthogonal neighbours.
pub struct GridCell<'g, T: Copy> {
    grid: &'g Grid<T>,
    index: usize,
}

impl<T: Copy> Clone for GridCell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy> Copy for GridCell<'_, T> {}

impl<T: Copy + fmt::Debug> fmt::Debug for GridCell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GridCell")
            .field("point", &self.point())
            .field("value", self.value())
            .finish()
    }
}

impl<'g, T: Copy> GridCell<'g, T> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn point(&self) -> Point {
        index_point(self.grid.width(), self.index)
    }

    pub fn x(&self) -> i32 {
        self.point().x
    }

    pub fn y(&self) -> i32 {
        self.point().y
    }

    pub fn value(&self) -> &'g T {
        &self.grid.cells.values[self.index]
    }

    pub fn neighbour(&self, dir: Direction) -> Option<GridCell<'g, T>> {
        self.grid.neighbour(self.index, dir).map(|index| GridCell {
            grid: self.grid,
            index,
        })
    }

    /// The in-bounds neighbours paired with the direction they lie in, in [CARDINALS] order.
    pub fn neighbours(&self) -> SmallVec<[(Direction, GridCell<'g, T>); 4]> {
        CARDINALS
            .into_iter()
            .filter_map(|dir| self.neighbour(dir).map(|n| (dir, n)))
            .collect()
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.values.chunks(self.width().max(1)) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// Copies `grid` and marks every position of `path` with `mark`. Nodes are mapped back to
/// positions through `point_of`; nodes without a position, or outside the grid, are skipped.
pub fn render_path<N, F>(grid: &Grid<char>, path: &[N], mut point_of: F, mark: char) -> Grid<char>
where
    F: FnMut(&N) -> Option<Point>,
{
    let mut rendered = grid.clone();
    for p in path.iter().filter_map(&mut point_of) {
        rendered.set(p, mark);
    }
    rendered
}
