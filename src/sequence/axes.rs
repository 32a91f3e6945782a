//! Drawing surfaces handed out to callers.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use ndarray::Array2;

use crate::error::{PlotDeckError, Result};

/// A single line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    /// Data points in plot order.
    pub points: Vec<(f64, f64)>,
}

/// Everything plotted into one axes.
#[derive(Debug, Clone, Default)]
pub struct AxesContent {
    /// Axes title.
    pub title: Option<String>,
    /// X axis label.
    pub xlabel: Option<String>,
    /// Y axis label.
    pub ylabel: Option<String>,
    /// Line series in insertion order.
    pub series: Vec<LineSeries>,
    /// Image shown as a heatmap (replaces line series when present).
    pub image: Option<Array2<f64>>,
}

/// Handle to a drawing surface.
///
/// Cloning an `Axes` yields another handle to the same surface, so the caller
/// can keep plotting after the owning frame has been stored in the sequence.
#[derive(Debug, Clone, Default)]
pub struct Axes {
    content: Rc<RefCell<AxesContent>>,
}

impl Axes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a line series from matching x and y slices.
    pub fn plot(&self, x: &[f64], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(PlotDeckError::SeriesLength {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let points = x.iter().copied().zip(y.iter().copied()).collect();
        self.content.borrow_mut().series.push(LineSeries { points });
        Ok(())
    }

    /// Add a line series against its sample index.
    pub fn plot_y(&self, y: &[f64]) {
        let points = y.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        self.content.borrow_mut().series.push(LineSeries { points });
    }

    /// Show a 2D array as an image.
    pub fn imshow(&self, data: Array2<f64>) {
        self.content.borrow_mut().image = Some(data);
    }

    /// Set the axes title.
    pub fn set_title(&self, title: impl Into<String>) {
        self.content.borrow_mut().title = Some(title.into());
    }

    /// Set the x axis label.
    pub fn set_xlabel(&self, label: impl Into<String>) {
        self.content.borrow_mut().xlabel = Some(label.into());
    }

    /// Set the y axis label.
    pub fn set_ylabel(&self, label: impl Into<String>) {
        self.content.borrow_mut().ylabel = Some(label.into());
    }

    /// Current title, if any.
    pub fn title(&self) -> Option<String> {
        self.content.borrow().title.clone()
    }

    /// Number of line series plotted so far.
    pub fn series_count(&self) -> usize {
        self.content.borrow().series.len()
    }

    /// Borrow the plotted content for rendering.
    pub fn content(&self) -> Ref<'_, AxesContent> {
        self.content.borrow()
    }

    /// Whether two handles point at the same surface.
    pub fn same_surface(&self, other: &Axes) -> bool {
        Rc::ptr_eq(&self.content, &other.content)
    }
}
