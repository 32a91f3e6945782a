//! Demo gallery shown by the `plotdeck` binary.

use ndarray::{Array1, Array2};

use crate::error::Result;
use crate::sequence::{FrameSequence, GridOptions, GridSpacing};

/// Fill a sequence with a small gallery of line plots, images and grids.
pub fn populate(seq: &mut FrameSequence) -> Result<()> {
    let x = Array1::linspace(0.0, 10.0, 100);

    // A couple of line plots
    for (i, frame) in (0..3).zip(&mut *seq) {
        let y = x.mapv(|v| (i as f64 * v).sin());
        frame.plot(&x.to_vec(), &y.to_vec())?;
        frame.set_title(format!("Line {}", i + 1));
    }

    // Images
    for (i, frame) in (0..2).zip(&mut *seq) {
        let phase = i as f64 * 1.3;
        frame.imshow(Array2::from_shape_fn((10, 10), |(r, c)| {
            (r as f64 * 0.7 + phase).sin() * (c as f64 * 0.45 - phase).cos()
        }));
        frame.set_title(format!("Image {}", i + 1));
    }

    // A single plot through the explicit call
    let frame = seq.create_frame();
    frame.plot(&[1.0, 4.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0])?;
    frame.set_title("Lonely plot");

    // Advanced grid: the bottom row spans both columns
    let grid = seq.new_axis_grid((2, 2), GridOptions::titled("Advanced interface grid-plot."));
    for ax in [grid.slot(0, 0)?, grid.slot(0, 1)?, grid.slot(1, ..)?] {
        ax.plot(&[1.0, 2.0, 3.0, 4.0], &[4.0, 1.0, 3.0, 2.0])?;
    }

    // Simple grid: one power of x per cell
    let options = GridOptions::titled("Simple interface grid-plot.").with_spacing(GridSpacing {
        horizontal: 2,
        vertical: 1,
    });
    let grid = seq.new_axis_subplots((3, 2), options);
    for (idx, ax) in grid.iter().enumerate() {
        let y: Vec<f64> = (0..10).map(|v| (v as f64).powi(idx as i32)).collect();
        ax.plot_y(&y);
        ax.set_title(idx.to_string());
    }

    tracing::info!("Demo gallery ready with {} frames", seq.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{Frame, FrameContent};

    #[test]
    fn gallery_layout() {
        let mut seq = FrameSequence::new();
        populate(&mut seq).unwrap();

        assert_eq!(seq.len(), 8);
        assert_eq!(seq.current_index(), Some(7));
        let titles: Vec<_> = seq.frames().iter().filter_map(Frame::title).collect();
        assert_eq!(
            titles,
            [
                "Line 1",
                "Line 2",
                "Line 3",
                "Image 1",
                "Image 2",
                "Lonely plot",
                "Advanced interface grid-plot.",
                "Simple interface grid-plot.",
            ]
        );

        match seq.frame(6).map(Frame::content) {
            Some(FrameContent::Grid(grid)) => {
                assert_eq!(grid.len(), 3);
                assert_eq!(grid.top_right(), Some(1));
            },
            other => panic!("expected grid, got {other:?}"),
        }
        match seq.frame(7).map(Frame::content) {
            Some(FrameContent::Grid(grid)) => {
                assert_eq!(grid.len(), 6);
                assert_eq!(grid.get(5).unwrap().content().series[0].points[2], (2.0, 32.0));
            },
            other => panic!("expected grid, got {other:?}"),
        }
    }
}
