//! The [`Grid`] type — a dense, bounds-checked 2D array of cell values.
//!
//! A `Grid` owns its storage. Cloning (or [`copy`](Grid::copy)) always yields
//! an independent deep copy; two grids never share cells. Callers that want a
//! traversal to see the same cells lend the grid by reference for the
//! duration of the call.

use std::fmt;

use crate::geom::{Pt, Range};

/// Grid of single-character terrain codes.
pub type CharGrid = Grid<char>;
/// Grid of small unsigned values.
pub type ByteGrid = Grid<u8>;
/// Grid of integers, e.g. distance fields.
pub type IntGrid = Grid<i32>;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors raised by grid construction and coordinate access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, width) × [0, height)` was used.
    OutOfRange { pos: Pt, width: i32, height: i32 },
    /// Non-positive dimensions, or a cell count that does not fit in memory.
    InvalidShape { height: i32, width: i32 },
    /// A row of `from_rows` input differs in length from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, width, height } => {
                write!(f, "index={pos}, width_height={}", Pt::new(*width, *height))
            }
            Self::InvalidShape { height, width } => {
                write!(f, "invalid grid shape: height={height}, width={width}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged grid rows: row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-shape 2D grid of `T`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Clone> Grid<T> {
    /// Create a `height × width` grid with every cell set to `default`.
    ///
    /// Fails with [`GridError::InvalidShape`] when a dimension is not
    /// positive or the cells cannot be allocated.
    pub fn new(height: i32, width: i32, default: T) -> Result<Self, GridError> {
        let len = checked_len(height, width)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::InvalidShape { height, width })?;
        cells.resize(len, default);
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Independent deep copy of the grid.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Read the value at `p`.
    pub fn get(&self, p: Pt) -> Result<T, GridError> {
        let i = self.index(p)?;
        Ok(self.cells[i].clone())
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows. Height is the number of rows, width the
    /// length of the first row; every row must have that length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;
        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let found = cells.len() - before;
            if row == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }
        let (Ok(h), Ok(w)) = (i32::try_from(height), i32::try_from(width)) else {
            return Err(GridError::InvalidShape {
                height: i32::MAX,
                width: i32::MAX,
            });
        };
        checked_len(h, w)?;
        Ok(Self {
            cells,
            width: w,
            height: h,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Pt` (width, height).
    #[inline]
    pub fn size(&self) -> Pt {
        self.bounds().size()
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: the smallest grid is 1×1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Pt) -> bool {
        self.bounds().contains(p)
    }

    /// Flat index of `p`. Every cell access goes through here.
    #[inline]
    fn index(&self, p: Pt) -> Result<usize, GridError> {
        if self.in_bounds(p) {
            Ok(p.y as usize * self.width as usize + p.x as usize)
        } else {
            Err(GridError::OutOfRange {
                pos: p,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Borrow the value at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Pt) -> Option<&T> {
        self.index(p).ok().map(|i| &self.cells[i])
    }

    /// Overwrite the value at `p`.
    pub fn set(&mut self, p: Pt, value: T) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Set every listed point to `value` and return how many cells actually
    /// changed.
    ///
    /// All points are bounds-checked first, so an out-of-range point leaves
    /// the grid untouched.
    pub fn update_values(&mut self, points: &[Pt], value: T) -> Result<usize, GridError>
    where
        T: PartialEq + Clone,
    {
        let indices = points
            .iter()
            .map(|&p| self.index(p))
            .collect::<Result<Vec<_>, _>>()?;
        let mut updated = 0;
        for i in indices {
            if self.cells[i] != value {
                self.cells[i] = value.clone();
                updated += 1;
            }
        }
        Ok(updated)
    }

    /// Count how many cells equal `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.cells.iter().filter(|c| *c == value).count()
    }

    /// Row-major iterator over `(Pt, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pt, &T)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }

    /// Rows joined by newlines, cells joined by single spaces.
    ///
    /// A debugging aid, not a wire format.
    pub fn render_text(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        for (y, row) in self.cells.chunks(self.width as usize).enumerate() {
            if y != 0 {
                out.push('\n');
            }
            for (x, cell) in row.iter().enumerate() {
                if x != 0 {
                    out.push(' ');
                }
                out.push_str(&cell.to_string());
            }
        }
        out
    }
}

impl Grid<char> {
    /// Build a character grid from text lines, one cell per `char`.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        Self::from_rows(lines.iter().map(|l| l.as_ref().chars()))
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}

fn checked_len(height: i32, width: i32) -> Result<usize, GridError> {
    let invalid = GridError::InvalidShape { height, width };
    if height <= 0 || width <= 0 {
        return Err(invalid);
    }
    (height as usize)
        .checked_mul(width as usize)
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(invalid)
}
