//! Frames holding several axes laid out on a grid.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use super::axes::Axes;
use crate::error::{PlotDeckError, Result};

/// Gap between grid cells, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpacing {
    /// Columns between horizontally adjacent cells.
    pub horizontal: u16,
    /// Rows between vertically adjacent cells.
    pub vertical: u16,
}

impl Default for GridSpacing {
    fn default() -> Self {
        Self {
            horizontal: 1,
            vertical: 0,
        }
    }
}

/// Options for a grid frame.
#[derive(Debug, Clone, Default)]
pub struct GridOptions {
    /// Super-title drawn above the whole grid.
    pub title: Option<String>,
    /// Cell gaps.
    pub spacing: GridSpacing,
}

impl GridOptions {
    /// Options with a super-title and default spacing.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            spacing: GridSpacing::default(),
        }
    }

    /// Replace the cell gaps.
    pub fn with_spacing(mut self, spacing: GridSpacing) -> Self {
        self.spacing = spacing;
        self
    }
}

/// How the grid cells were created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    /// One axes filling the frame.
    Single,
    /// Every cell pre-created, one axes per cell.
    Simple,
    /// Axes added on demand over arbitrary row/column spans.
    Advanced,
}

/// Row and column span occupied by one axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSlot {
    /// Covered rows.
    pub rows: Range<usize>,
    /// Covered columns.
    pub cols: Range<usize>,
}

/// Something that selects a span along one grid dimension.
pub trait GridIndex {
    /// Resolve against a dimension of length `len`.
    fn span(self, len: usize) -> Range<usize>;
}

impl GridIndex for usize {
    fn span(self, _len: usize) -> Range<usize> {
        self..self.saturating_add(1)
    }
}

impl GridIndex for Range<usize> {
    fn span(self, _len: usize) -> Range<usize> {
        self
    }
}

impl GridIndex for RangeInclusive<usize> {
    fn span(self, _len: usize) -> Range<usize> {
        *self.start()..self.end().saturating_add(1)
    }
}

impl GridIndex for RangeFrom<usize> {
    fn span(self, len: usize) -> Range<usize> {
        self.start..len
    }
}

impl GridIndex for RangeTo<usize> {
    fn span(self, _len: usize) -> Range<usize> {
        0..self.end
    }
}

impl GridIndex for RangeFull {
    fn span(self, len: usize) -> Range<usize> {
        0..len
    }
}

/// A frame made of several axes.
#[derive(Debug, Clone)]
pub struct AxesGrid {
    shape: (usize, usize),
    mode: GridMode,
    options: GridOptions,
    cells: Vec<(GridSlot, Axes)>,
}

impl AxesGrid {
    /// One-cell grid around an existing axes.
    pub(crate) fn single(axes: Axes) -> Self {
        let slot = GridSlot {
            rows: 0..1,
            cols: 0..1,
        };
        Self {
            shape: (1, 1),
            mode: GridMode::Single,
            options: GridOptions::default(),
            cells: vec![(slot, axes)],
        }
    }

    /// Grid with every cell filled, row-major.
    pub(crate) fn simple(shape: (usize, usize), options: GridOptions) -> Self {
        let (rows, cols) = shape;
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| {
                let slot = GridSlot {
                    rows: r..r + 1,
                    cols: c..c + 1,
                };
                (slot, Axes::new())
            })
            .collect();
        Self {
            shape,
            mode: GridMode::Simple,
            options,
            cells,
        }
    }

    /// Empty grid; cells come from [`AxesGrid::slot`].
    pub(crate) fn advanced(shape: (usize, usize), options: GridOptions) -> Self {
        Self {
            shape,
            mode: GridMode::Advanced,
            options,
            cells: Vec::new(),
        }
    }

    /// Add an axes covering the given rows and columns.
    pub fn slot(&mut self, rows: impl GridIndex, cols: impl GridIndex) -> Result<Axes> {
        let rows = rows.span(self.shape.0);
        let cols = cols.span(self.shape.1);

        if self.mode != GridMode::Advanced {
            return Err(PlotDeckError::SimpleGridSlot { shape: self.shape });
        }
        let valid = |r: &Range<usize>, len: usize| r.start < r.end && r.end <= len;
        if !valid(&rows, self.shape.0) || !valid(&cols, self.shape.1) {
            return Err(PlotDeckError::GridSlot {
                rows,
                cols,
                shape: self.shape,
            });
        }

        let axes = Axes::new();
        self.cells.push((GridSlot { rows, cols }, axes.clone()));
        Ok(axes)
    }

    /// The i-th axes in creation order.
    pub fn get(&self, index: usize) -> Option<Axes> {
        self.cells.get(index).map(|(_, ax)| ax.clone())
    }

    /// Number of axes in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no axes have been added yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// How the cells were created.
    pub fn mode(&self) -> GridMode {
        self.mode
    }

    /// Super-title.
    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    /// Cell gaps.
    pub fn spacing(&self) -> GridSpacing {
        self.options.spacing
    }

    /// Slots paired with their axes.
    pub fn cells(&self) -> &[(GridSlot, Axes)] {
        &self.cells
    }

    /// Iterate over the axes.
    pub fn iter(&self) -> impl Iterator<Item = &Axes> {
        self.cells.iter().map(|(_, ax)| ax)
    }

    /// Index of the axes in the top-right corner.
    ///
    /// Picks the topmost row first, then the rightmost column among those.
    pub fn top_right(&self) -> Option<usize> {
        let top = self.cells.iter().map(|(slot, _)| slot.rows.start).min()?;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, (slot, _))| slot.rows.start == top)
            .max_by_key(|(i, (slot, _))| (slot.cols.end, std::cmp::Reverse(*i)))
            .map(|(i, _)| i)
    }
}

impl<'a> IntoIterator for &'a AxesGrid {
    type Item = &'a Axes;
    type IntoIter = Box<dyn Iterator<Item = &'a Axes> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
