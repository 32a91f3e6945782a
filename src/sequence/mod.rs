//! Frame sequence - ordered plot frames with keyboard navigation.
//!
//! A [`FrameSequence`] owns every frame created so far and keeps exactly one of
//! them visible. Frames are appended through [`FrameSequence::create_frame`]
//! (or by iterating the sequence), never reordered and never removed.

mod axes;
mod grid;
mod keymap;
pub mod ui;

pub use axes::{Axes, AxesContent, LineSeries};
pub use grid::{AxesGrid, GridIndex, GridMode, GridOptions, GridSlot, GridSpacing};
pub use keymap::{action_for, Action, KEYMAP};

use crossterm::event::KeyEvent;

use crate::error::{PlotDeckError, Result};
use crate::ui::format_number;

/// Step taken by [`FrameSequence::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One frame back, stopping at the first.
    Previous,
    /// One frame forward, stopping at the last.
    Next,
    /// The first frame.
    First,
    /// The last frame.
    Last,
}

/// Where the frame-number label sits relative to its anchor axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberPlacement {
    /// Above the top-right corner.
    #[default]
    Top,
    /// Below the bottom-right corner.
    Bottom,
}

/// Sequence configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceConfig {
    /// Initial state of the numbering flag.
    pub numbering: bool,
    /// Label position.
    pub placement: NumberPlacement,
}

/// What a frame draws, borrowed from the frame.
#[derive(Debug, Clone, Copy)]
pub enum FrameContent<'a> {
    /// A single axes filling the frame.
    Single(&'a Axes),
    /// Several axes on a grid.
    Grid(&'a AxesGrid),
}

/// One page of the sequence.
#[derive(Debug, Clone)]
pub struct Frame {
    ordinal: usize,
    visible: bool,
    grid: AxesGrid,
}

impl Frame {
    /// Position in the sequence.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Whether this is the frame on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// What the frame draws.
    pub fn content(&self) -> FrameContent<'_> {
        match (self.grid.mode(), self.grid.cells()) {
            (GridMode::Single, [(_, ax)]) => FrameContent::Single(ax),
            _ => FrameContent::Grid(&self.grid),
        }
    }

    /// Title shown for listings: the axes title or the grid super-title.
    pub fn title(&self) -> Option<String> {
        match self.content() {
            FrameContent::Single(ax) => ax.title(),
            FrameContent::Grid(grid) => grid.title().map(str::to_string),
        }
    }

    /// One-line description for listings.
    pub fn summary(&self) -> String {
        let title = self.title().unwrap_or_else(|| "untitled".to_string());
        match self.content() {
            FrameContent::Single(ax) => format!("{} ({})", title, describe_axes(ax)),
            FrameContent::Grid(grid) => {
                let (rows, cols) = grid.shape();
                format!("{} (grid {}x{}, {} axes)", title, rows, cols, grid.len())
            },
        }
    }

    /// Index of the axes the number label attaches to, `None` while a grid
    /// has no axes.
    pub(crate) fn anchor(&self) -> Option<usize> {
        self.grid.top_right()
    }
}

fn describe_axes(ax: &Axes) -> String {
    let content = ax.content();
    if let Some(image) = &content.image {
        let (rows, cols) = image.dim();
        return format!("image {}x{}", rows, cols);
    }
    let points: usize = content.series.iter().map(|s| s.points.len()).sum();
    match content.series.len() {
        0 => "empty".to_string(),
        1 => format!("1 series, {} points", format_number(points)),
        n => format!("{} series, {} points", n, format_number(points)),
    }
}

/// Frame-number label currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    /// Label text, `"<index+1>/<total>"`.
    pub text: String,
    /// Frame the label belongs to.
    pub frame: usize,
    /// Label position.
    pub placement: NumberPlacement,
}

/// Ordered plot frames with one visible at a time.
#[derive(Debug, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    current: Option<usize>,
    numbering: bool,
    config: SequenceConfig,
    overlay: Option<Overlay>,
    redraw: bool,
}

impl FrameSequence {
    /// Create an empty sequence with default settings.
    pub fn new() -> Self {
        Self::with_config(SequenceConfig::default())
    }

    /// Create an empty sequence.
    pub fn with_config(config: SequenceConfig) -> Self {
        Self {
            frames: Vec::new(),
            current: None,
            numbering: config.numbering,
            config,
            overlay: None,
            redraw: false,
        }
    }

    /// Append a single-axes frame, show it and return its drawing surface.
    pub fn create_frame(&mut self) -> Axes {
        let axes = Axes::new();
        self.push(AxesGrid::single(axes.clone()));
        axes
    }

    /// Append a grid frame with every cell pre-created.
    pub fn new_axis_subplots(&mut self, shape: (usize, usize), options: GridOptions) -> &mut AxesGrid {
        self.push(AxesGrid::simple(shape, options))
    }

    /// Append a grid frame whose axes are added with [`AxesGrid::slot`].
    pub fn new_axis_grid(&mut self, shape: (usize, usize), options: GridOptions) -> &mut AxesGrid {
        self.push(AxesGrid::advanced(shape, options))
    }

    fn push(&mut self, grid: AxesGrid) -> &mut AxesGrid {
        let ordinal = self.frames.len();
        self.frames.push(Frame {
            ordinal,
            visible: false,
            grid,
        });
        tracing::debug!("Created frame {}", ordinal + 1);
        self.show(ordinal);
        &mut self.frames[ordinal].grid
    }

    /// Move through the sequence. Does nothing on an empty sequence.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(current) = self.current else {
            return;
        };
        let last = self.frames.len() - 1;
        let target = match direction {
            Direction::Previous => current.saturating_sub(1),
            Direction::Next => (current + 1).min(last),
            Direction::First => 0,
            Direction::Last => last,
        };
        if target != current {
            tracing::debug!("{:?}: frame {} -> {}", direction, current + 1, target + 1);
            self.show(target);
        }
    }

    /// Show the frame at `index`.
    pub fn switch_to(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(PlotDeckError::frame_index(index, self.frames.len()));
        }
        self.show(index);
        Ok(())
    }

    /// Flip the numbering flag and add or remove the label.
    pub fn toggle_numbering(&mut self) {
        self.numbering = !self.numbering;
        tracing::debug!("Numbering {}", if self.numbering { "on" } else { "off" });
        self.refresh_overlay();
        self.redraw = true;
    }

    /// Apply the action bound to a key. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let action = action_for(key.code)?;
        self.apply(action);
        Some(action)
    }

    /// Execute a navigation action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Previous => self.navigate(Direction::Previous),
            Action::Next => self.navigate(Direction::Next),
            Action::First => self.navigate(Direction::First),
            Action::Last => self.navigate(Direction::Last),
            Action::ToggleNumbering => self.toggle_numbering(),
        }
    }

    fn show(&mut self, index: usize) {
        if let Some(previous) = self.current {
            self.frames[previous].visible = false;
        }
        self.frames[index].visible = true;
        self.current = Some(index);
        self.refresh_overlay();
        self.redraw = true;
    }

    fn refresh_overlay(&mut self) {
        self.overlay = None;
        if !self.numbering {
            return;
        }
        if let Some(index) = self.current {
            self.overlay = Some(Overlay {
                text: format!("{}/{}", index + 1, self.frames.len()),
                frame: index,
                placement: self.config.placement,
            });
        }
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been created yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the visible frame.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The visible frame.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.map(|i| &self.frames[i])
    }

    /// Frame by position.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// All frames in navigation order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame-number label, if shown.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// State of the numbering flag.
    pub fn numbering_enabled(&self) -> bool {
        self.numbering
    }
}

/// Endless source of new frames, so a sequence can be zipped with data:
/// `for (i, ax) in (0..3).zip(&mut seq) { .. }`.
impl Iterator for FrameSequence {
    type Item = Axes;

    fn next(&mut self) -> Option<Axes> {
        Some(self.create_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn assert_one_visible(seq: &FrameSequence) {
        let visible: Vec<_> = seq
            .frames()
            .iter()
            .filter(|f| f.is_visible())
            .map(Frame::ordinal)
            .collect();
        if seq.is_empty() {
            assert!(visible.is_empty());
            assert_eq!(seq.current_index(), None);
        } else {
            assert_eq!(visible, vec![seq.current_index().unwrap()]);
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn newest_frame_is_the_visible_one() {
        let mut seq = FrameSequence::new();
        assert_one_visible(&seq);
        for n in 1..=5 {
            seq.create_frame();
            assert_one_visible(&seq);
            assert_eq!(seq.current_index(), Some(n - 1));
            assert_eq!(seq.len(), n);
        }
    }

    #[test]
    fn iteration_and_next_create_frames() {
        let mut seq = FrameSequence::new();
        for (i, ax) in (0..3).zip(&mut seq) {
            ax.set_title(format!("Line {}", i + 1));
        }
        let ax = seq.next().unwrap();
        ax.set_title("Lonely plot");

        assert_eq!(seq.len(), 4);
        assert_eq!(seq.current_index(), Some(3));
        let titles: Vec<_> = seq.frames().iter().filter_map(Frame::title).collect();
        assert_eq!(titles, ["Line 1", "Line 2", "Line 3", "Lonely plot"]);
        assert_one_visible(&seq);
    }

    #[test]
    fn navigation_scenario() {
        let mut seq = FrameSequence::new();
        seq.by_ref().take(3).for_each(drop);
        assert_eq!(seq.current_index(), Some(2));

        seq.navigate(Direction::Previous);
        assert_eq!(seq.current_index(), Some(1));
        assert_one_visible(&seq);
        seq.navigate(Direction::First);
        assert_eq!(seq.current_index(), Some(0));
        seq.navigate(Direction::Previous);
        assert_eq!(seq.current_index(), Some(0));
        seq.navigate(Direction::Last);
        assert_eq!(seq.current_index(), Some(2));
        seq.navigate(Direction::Next);
        assert_eq!(seq.current_index(), Some(2));
        assert_one_visible(&seq);
    }

    #[test]
    fn clamped_moves_request_no_redraw() {
        let mut seq = FrameSequence::new();
        seq.create_frame();
        assert!(seq.take_redraw_request());
        assert!(!seq.take_redraw_request());

        seq.navigate(Direction::Next);
        seq.navigate(Direction::Previous);
        seq.navigate(Direction::First);
        assert!(!seq.take_redraw_request());

        seq.create_frame();
        seq.take_redraw_request();
        seq.navigate(Direction::First);
        assert!(seq.take_redraw_request());
    }

    #[test]
    fn empty_sequence_ignores_navigation() {
        let mut seq = FrameSequence::new();
        for direction in [
            Direction::Next,
            Direction::Previous,
            Direction::First,
            Direction::Last,
        ] {
            seq.navigate(direction);
        }
        assert_eq!(seq.current_index(), None);
        assert!(seq.current_frame().is_none());
        assert!(!seq.take_redraw_request());
        assert_one_visible(&seq);

        seq.toggle_numbering();
        assert!(seq.numbering_enabled());
        assert!(seq.overlay().is_none());
    }

    #[test]
    fn numbering_toggle_scenario() {
        let mut seq = FrameSequence::new();
        seq.create_frame();
        assert!(seq.overlay().is_none());

        seq.toggle_numbering();
        let overlay = seq.overlay().unwrap();
        assert_eq!(overlay.text, "1/1");
        assert_eq!(overlay.frame, 0);
        assert_eq!(seq.current_frame().and_then(Frame::anchor), Some(0));

        seq.toggle_numbering();
        assert!(seq.overlay().is_none());
        assert!(!seq.numbering_enabled());
    }

    #[test]
    fn overlay_follows_the_visible_frame() {
        let mut seq = FrameSequence::with_config(SequenceConfig {
            numbering: true,
            placement: NumberPlacement::Bottom,
        });
        seq.create_frame();
        assert_eq!(seq.overlay().unwrap().text, "1/1");

        seq.create_frame();
        seq.create_frame();
        assert_eq!(seq.overlay().unwrap().text, "3/3");

        seq.navigate(Direction::First);
        let overlay = seq.overlay().unwrap();
        assert_eq!(overlay.text, "1/3");
        assert_eq!(overlay.frame, 0);
        assert_eq!(overlay.placement, NumberPlacement::Bottom);

        seq.navigate(Direction::Next);
        assert_eq!(seq.overlay().unwrap().text, "2/3");
    }

    #[test]
    fn numbering_persists_across_creation() {
        let mut seq = FrameSequence::new();
        seq.create_frame();
        seq.toggle_numbering();
        seq.create_frame();
        assert!(seq.numbering_enabled());
        assert_eq!(seq.overlay().unwrap().text, "2/2");
    }

    #[test]
    fn summaries_describe_content() {
        let mut seq = FrameSequence::new();
        let ax = seq.create_frame();
        ax.set_title("Line 1");
        ax.plot_y(&[0.0; 1200]);
        seq.create_frame().imshow(ndarray::Array2::zeros((10, 4)));
        seq.create_frame();
        let grid = seq.new_axis_grid((2, 3), GridOptions::titled("Grid"));
        grid.slot(.., 0).unwrap();

        let summaries: Vec<_> = seq.frames().iter().map(Frame::summary).collect();
        assert_eq!(
            summaries,
            [
                "Line 1 (1 series, 1,200 points)",
                "untitled (image 10x4)",
                "untitled (empty)",
                "Grid (grid 2x3, 1 axes)",
            ]
        );
    }

    #[test]
    fn switch_to_checks_bounds() {
        let mut seq = FrameSequence::new();
        seq.by_ref().take(2).for_each(drop);
        seq.switch_to(0).unwrap();
        assert_eq!(seq.current_index(), Some(0));

        let err = seq.switch_to(2).unwrap_err();
        assert!(matches!(err, PlotDeckError::FrameIndex { index: 2, len: 2 }));
        assert_eq!(seq.current_index(), Some(0));
        assert_one_visible(&seq);
    }

    #[test]
    fn keys_drive_navigation() {
        let mut seq = FrameSequence::new();
        seq.by_ref().take(3).for_each(drop);

        assert_eq!(seq.handle_key(key(KeyCode::Home)), Some(Action::First));
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.handle_key(key(KeyCode::Right)), Some(Action::Next));
        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.handle_key(key(KeyCode::Left)), Some(Action::Previous));
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.handle_key(key(KeyCode::End)), Some(Action::Last));
        assert_eq!(seq.current_index(), Some(2));

        assert_eq!(seq.handle_key(key(KeyCode::Delete)), Some(Action::ToggleNumbering));
        assert_eq!(seq.overlay().unwrap().text, "3/3");

        seq.take_redraw_request();
        assert_eq!(seq.handle_key(key(KeyCode::Char('x'))), None);
        assert_eq!(seq.handle_key(key(KeyCode::Up)), None);
        assert_eq!(seq.current_index(), Some(2));
        assert!(!seq.take_redraw_request());
        assert_one_visible(&seq);
    }

    #[test]
    fn grid_frames_join_the_sequence() {
        let mut seq = FrameSequence::with_config(SequenceConfig {
            numbering: true,
            ..SequenceConfig::default()
        });
        seq.create_frame();

        let grid = seq.new_axis_grid((2, 2), GridOptions::titled("Advanced"));
        assert!(grid.is_empty());
        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.current_frame().and_then(Frame::anchor), None);

        let subplots = seq.new_axis_subplots((3, 2), GridOptions::default());
        assert_eq!(subplots.len(), 6);
        assert_eq!(seq.current_index(), Some(2));
        assert_eq!(seq.current_frame().and_then(Frame::anchor), Some(1));
        assert_eq!(seq.overlay().unwrap().text, "3/3");
        assert_eq!(seq.frame(1).and_then(Frame::title).as_deref(), Some("Advanced"));
        assert!(matches!(seq.frame(0).map(Frame::content), Some(FrameContent::Single(_))));
        assert!(matches!(seq.frame(1).map(Frame::content), Some(FrameContent::Grid(_))));
        assert_one_visible(&seq);
    }

    #[test]
    fn grid_anchor_tracks_slots_added_after_creation() {
        let mut seq = FrameSequence::with_config(SequenceConfig {
            numbering: true,
            ..SequenceConfig::default()
        });
        let grid = seq.new_axis_grid((2, 2), GridOptions::default());
        grid.slot(1, ..).unwrap();
        grid.slot(0, 0).unwrap();
        grid.slot(0, 1).unwrap();
        let top_right = grid.top_right();

        assert_eq!(top_right, Some(2));
        assert_eq!(seq.current_frame().and_then(Frame::anchor), top_right);
        assert_eq!(seq.overlay().unwrap().text, "1/1");
    }

    #[test]
    fn invariant_holds_over_mixed_operations() {
        let mut seq = FrameSequence::new();
        let actions = [
            Action::Next,
            Action::ToggleNumbering,
            Action::Previous,
            Action::Last,
            Action::First,
            Action::ToggleNumbering,
        ];
        for round in 0..4 {
            seq.create_frame();
            assert_one_visible(&seq);
            for action in actions {
                seq.apply(action);
                assert_one_visible(&seq);
                let index = seq.current_index().unwrap();
                assert!(index < seq.len(), "round {round}");
                match seq.overlay() {
                    Some(overlay) => {
                        assert!(seq.numbering_enabled());
                        assert_eq!(overlay.frame, index);
                        assert_eq!(overlay.text, format!("{}/{}", index + 1, seq.len()));
                    }
                    None => assert!(!seq.numbering_enabled()),
                }
            }
        }
    }
}
